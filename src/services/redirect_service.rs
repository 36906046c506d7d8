use url::Url;
use validator::Validate;

use crate::{
    constants::SESSION_QUERY_KEY,
    errors::{AppError, AppResult},
    models::dto::RedirectParams,
};

/// Builds annotation-session URLs for participants arriving from the survey
/// platform.
pub struct RedirectService {
    base_url: Url,
}

impl RedirectService {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves the callback parameters to the session URL. Both identifiers
    /// must be present and non-empty. The participant id is checked but is not
    /// forwarded.
    pub fn resolve(&self, params: &RedirectParams) -> AppResult<Url> {
        params.validate().map_err(|_| AppError::MissingParameters)?;

        let session_id = params
            .session_id
            .as_deref()
            .ok_or(AppError::MissingParameters)?;

        Ok(self.session_url(session_id))
    }

    /// `{base}/?session={session_id}`; the base path is kept and ends in a
    /// single slash.
    pub fn session_url(&self, session_id: &str) -> Url {
        let mut target = self.base_url.clone();
        let path = format!("{}/", self.base_url.path().trim_end_matches('/'));
        target.set_path(&path);
        target.set_fragment(None);
        target
            .query_pairs_mut()
            .clear()
            .append_pair(SESSION_QUERY_KEY, session_id);
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base: &str) -> RedirectService {
        RedirectService::new(Url::parse(base).unwrap())
    }

    fn params(pid: Option<&str>, session: Option<&str>) -> RedirectParams {
        RedirectParams {
            prolific_pid: pid.map(String::from),
            session_id: session.map(String::from),
        }
    }

    #[test]
    fn resolves_session_url() {
        let url = service("https://annotate.example.org")
            .resolve(&params(Some("abc"), Some("xyz")))
            .unwrap();

        assert_eq!(url.as_str(), "https://annotate.example.org/?session=xyz");
    }

    #[test]
    fn participant_id_is_not_forwarded() {
        let url = service("https://annotate.example.org")
            .resolve(&params(Some("participant-42"), Some("xyz")))
            .unwrap();

        assert!(!url.as_str().contains("participant-42"));
    }

    #[test]
    fn keeps_base_path_prefix() {
        let svc = service("https://host.example/prodigy");
        assert_eq!(
            svc.session_url("s1").as_str(),
            "https://host.example/prodigy/?session=s1"
        );

        let svc = service("https://host.example/prodigy/");
        assert_eq!(
            svc.session_url("s1").as_str(),
            "https://host.example/prodigy/?session=s1"
        );
    }

    #[test]
    fn base_query_and_fragment_are_replaced() {
        let svc = service("http://localhost:8080/?old=1#top");
        assert_eq!(svc.session_url("s1").as_str(), "http://localhost:8080/?session=s1");
    }

    #[test]
    fn session_id_is_encoded() {
        let svc = service("https://host.example");
        assert_eq!(
            svc.session_url("a b&c").as_str(),
            "https://host.example/?session=a+b%26c"
        );
    }

    #[test]
    fn missing_identifiers_are_rejected() {
        let svc = service("https://host.example");

        for p in [
            params(None, None),
            params(Some("abc"), None),
            params(None, Some("xyz")),
            params(Some(""), Some("xyz")),
            params(Some("abc"), Some("")),
        ] {
            assert!(matches!(svc.resolve(&p), Err(AppError::MissingParameters)));
        }
    }
}
