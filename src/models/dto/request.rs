use url::form_urlencoded;
use validator::Validate;

use crate::constants::{PROLIFIC_PID_PARAM, SESSION_ID_PARAM};

/// Identifiers the survey platform appends to its study URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct RedirectParams {
    #[validate(required, length(min = 1))]
    pub prolific_pid: Option<String>,

    #[validate(required, length(min = 1))]
    pub session_id: Option<String>,
}

impl RedirectParams {
    /// Reads both identifiers from a raw query string. A repeated key keeps
    /// its first value; unrelated keys are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut params = RedirectParams::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                PROLIFIC_PID_PARAM => &mut params.prolific_pid,
                SESSION_ID_PARAM => &mut params.session_id,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_identifiers() {
        let params = RedirectParams::from_query("PROLIFIC_PID=abc&SESSION_ID=xyz&STUDY_ID=s1");

        assert_eq!(params.prolific_pid.as_deref(), Some("abc"));
        assert_eq!(params.session_id.as_deref(), Some("xyz"));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn first_occurrence_wins() {
        let params = RedirectParams::from_query("SESSION_ID=first&SESSION_ID=second&PROLIFIC_PID=p");
        assert_eq!(params.session_id.as_deref(), Some("first"));
    }

    #[test]
    fn decodes_percent_encoding() {
        let params = RedirectParams::from_query("PROLIFIC_PID=a%20b&SESSION_ID=x%2By");

        assert_eq!(params.prolific_pid.as_deref(), Some("a b"));
        assert_eq!(params.session_id.as_deref(), Some("x+y"));
    }

    #[test]
    fn keys_are_case_sensitive() {
        let params = RedirectParams::from_query("prolific_pid=abc&session_id=xyz");
        assert_eq!(params, RedirectParams::default());
    }

    #[test]
    fn missing_or_empty_values_fail_validation() {
        for query in [
            "",
            "SESSION_ID=xyz",
            "PROLIFIC_PID=abc",
            "PROLIFIC_PID=&SESSION_ID=xyz",
            "PROLIFIC_PID=abc&SESSION_ID=",
        ] {
            assert!(
                RedirectParams::from_query(query).validate().is_err(),
                "query '{}' should be rejected",
                query
            );
        }
    }
}
