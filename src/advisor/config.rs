use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variables consulted by [`AdvisorConfig::from_env`], in order.
pub const API_KEY_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];
pub const MODEL_VAR: &str = "AGENTVIS_ADVISOR_MODEL";
pub const BASE_URL_VAR: &str = "AGENTVIS_ADVISOR_URL";

/// Connection settings for the advisory service.
#[derive(Clone, PartialEq)]
pub struct AdvisorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// The key must never end up in logs.
impl std::fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AdvisorConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves the configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_key: API_KEY_VARS.iter().find_map(|name| non_empty(*name)),
            model: non_empty(MODEL_VAR).unwrap_or(defaults.model),
            base_url: non_empty(BASE_URL_VAR).unwrap_or(defaults.base_url),
            timeout: defaults.timeout,
        }
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured key, if it is present and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: AHashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults_without_key() {
        let config = AdvisorConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_key(), None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn blank_key_counts_as_missing_and_falls_through() {
        let config = AdvisorConfig::from_lookup(lookup_from(&[
            ("API_KEY", "  "),
            ("GEMINI_API_KEY", "secondary"),
        ]));
        assert_eq!(config.api_key(), Some("secondary"));
    }

    #[test]
    fn overrides_are_applied() {
        let config = AdvisorConfig::from_lookup(lookup_from(&[
            ("API_KEY", "k"),
            (MODEL_VAR, "gemini-pro"),
            (BASE_URL_VAR, "http://localhost:9999"),
        ]));
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert!(!format!("{:?}", config).contains("\"k\""));
    }
}
