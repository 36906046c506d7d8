use std::env;

use url::Url;

use crate::errors::{AppError, AppResult};

const DEFAULT_PRODIGY_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_WEB_SERVER_HOST: &str = "127.0.0.1";
const DEFAULT_WEB_SERVER_PORT: u16 = 5000;

#[derive(Clone, Debug)]
pub struct Config {
    pub prodigy_base_url: Url,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// missing keys and for a port that does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let base_url = lookup("PRODIGY_BASE_URL")
            .unwrap_or_else(|| DEFAULT_PRODIGY_BASE_URL.to_string());

        Ok(Self {
            prodigy_base_url: Self::parse_base_url(&base_url)?,
            web_server_host: lookup("WEB_SERVER_HOST")
                .unwrap_or_else(|| DEFAULT_WEB_SERVER_HOST.to_string()),
            web_server_port: lookup("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_WEB_SERVER_PORT),
        })
    }

    /// Parses the annotation server's public URL. Only http(s) URLs can be
    /// used as a redirect target.
    pub fn parse_base_url(raw: &str) -> AppResult<Url> {
        let url = Url::parse(raw.trim())?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AppError::ConfigError(format!(
                "PRODIGY_BASE_URL must use http or https, got '{}'",
                other
            ))),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            prodigy_base_url: Url::parse("https://annotate.example.org").unwrap(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
        }
    }
}
