use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_LEADS_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a whole number of seconds greater than zero, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
    #[error("BACKEND_URL must start with http:// or https://, got {0:?}")]
    InvalidBackendUrl(String),
}

/// Runtime settings read from the environment (after `.env` is loaded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the lead-storage service, without a trailing slash
    pub backend_url: String,
    pub leads_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup("BACKEND_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.into());
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(backend_url));
        }

        let leads_timeout = match lookup("LEADS_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_LEADS_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        name: "LEADS_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
        };

        Ok(Config {
            backend_url,
            leads_timeout,
        })
    }

    /// Where leads are POSTed
    pub fn leads_endpoint(&self) -> String {
        format!("{}/api/leads", self.backend_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_local_backend() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.leads_endpoint(), "http://localhost:8000/api/leads");
        assert_eq!(config.leads_timeout, Duration::from_secs(10));
    }

    #[test]
    fn trailing_slashes_stripped() {
        let config = config_with(&[("BACKEND_URL", "https://leads.example.com//")]).unwrap();
        assert_eq!(config.leads_endpoint(), "https://leads.example.com/api/leads");
    }

    #[test]
    fn blank_backend_url_uses_default() {
        let config = config_with(&[("BACKEND_URL", "   ")]).unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn rejects_non_http_backend() {
        assert!(matches!(
            config_with(&[("BACKEND_URL", "localhost:8000")]),
            Err(ConfigError::InvalidBackendUrl(_))
        ));
    }

    #[test]
    fn timeout_parsing() {
        let config = config_with(&[("LEADS_TIMEOUT_SECS", " 3 ")]).unwrap();
        assert_eq!(config.leads_timeout, Duration::from_secs(3));

        for bad in ["0", "-1", "soon"] {
            assert!(matches!(
                config_with(&[("LEADS_TIMEOUT_SECS", bad)]),
                Err(ConfigError::InvalidTimeout { .. })
            ));
        }
    }
}
