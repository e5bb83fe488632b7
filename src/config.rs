//! Runtime configuration read from the environment.

use crate::dosing::Locale;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Language used when a request does not name one
    pub default_locale: Locale,
    /// Allow cross-origin requests from any origin
    pub cors_allow_any: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            default_locale: Locale::En,
            cors_allow_any: false,
        }
    }
}

impl Config {
    /// Read `BIND_ADDR`, `DEFAULT_LOCALE` and `CORS_ALLOW_ANY`, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            default_locale: get("DEFAULT_LOCALE")
                .map(|tag| Locale::from_tag(&tag))
                .unwrap_or(defaults.default_locale),
            cors_allow_any: get("CORS_ALLOW_ANY")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.cors_allow_any),
        }
    }

    /// Resolve an optional request language tag against the default.
    pub fn locale_or_default(&self, tag: Option<&str>) -> Locale {
        tag.map(Locale::from_tag).unwrap_or(self.default_locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.default_locale, Locale::En);
        assert!(!config.cors_allow_any);
    }

    #[test]
    fn test_reads_values() {
        let env: HashMap<&str, &str> = [
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("DEFAULT_LOCALE", "es-AR"),
            ("CORS_ALLOW_ANY", "TRUE"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.default_locale, Locale::Es);
        assert!(config.cors_allow_any);
    }

    #[test]
    fn test_locale_or_default() {
        let config = Config {
            default_locale: Locale::Es,
            ..Config::default()
        };
        assert_eq!(config.locale_or_default(None), Locale::Es);
        assert_eq!(config.locale_or_default(Some("en")), Locale::En);
    }
}
