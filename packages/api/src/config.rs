//! Environment configuration.
//!
//! Three values are expected: the data service URL and key, and the identity
//! provider's publishable key. None of them is fatal when absent; a warning is
//! logged and a placeholder is used so the app still boots and shows its
//! public pages. Calls that need the missing service will fail at request time.

pub const DATA_API_URL: &str = "DATA_API_URL";
pub const DATA_API_KEY: &str = "DATA_API_KEY";
pub const IDENTITY_PUBLISHABLE_KEY: &str = "IDENTITY_PUBLISHABLE_KEY";
pub const IDENTITY_ISSUER_URL: &str = "IDENTITY_ISSUER_URL";
pub const IDENTITY_CLIENT_SECRET: &str = "IDENTITY_CLIENT_SECRET";
pub const AUTH_REDIRECT_URI: &str = "AUTH_REDIRECT_URI";

const PLACEHOLDER_DATA_URL: &str = "https://placeholder.supabase.co";
const PLACEHOLDER_DATA_KEY: &str = "placeholder";
const PLACEHOLDER_PUBLISHABLE_KEY: &str = "pk_test_placeholder";
const PLACEHOLDER_ISSUER: &str = "https://placeholder.identity.invalid";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/auth/callback";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_api_url: String,
    pub data_api_key: String,
    pub identity_publishable_key: String,
    pub identity_issuer_url: String,
    pub identity_client_secret: Option<String>,
    pub auth_redirect_uri: String,
}

impl AppConfig {
    /// Build from any key lookup. Blank values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str, placeholder: &str| {
            get(key).unwrap_or_else(|| {
                tracing::warn!("{key} not set, using placeholder value");
                placeholder.to_string()
            })
        };

        Self {
            data_api_url: required(DATA_API_URL, PLACEHOLDER_DATA_URL),
            data_api_key: required(DATA_API_KEY, PLACEHOLDER_DATA_KEY),
            identity_publishable_key: required(IDENTITY_PUBLISHABLE_KEY, PLACEHOLDER_PUBLISHABLE_KEY),
            identity_issuer_url: get(IDENTITY_ISSUER_URL)
                .unwrap_or_else(|| PLACEHOLDER_ISSUER.to_string()),
            identity_client_secret: get(IDENTITY_CLIENT_SECRET),
            auth_redirect_uri: get(AUTH_REDIRECT_URI)
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
        }
    }

    /// Read the process environment, honouring a `.env` file.
    #[cfg(feature = "server")]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Names of required variables that fell back to placeholders.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.data_api_url == PLACEHOLDER_DATA_URL {
            missing.push(DATA_API_URL);
        }
        if self.data_api_key == PLACEHOLDER_DATA_KEY {
            missing.push(DATA_API_KEY);
        }
        if self.identity_publishable_key == PLACEHOLDER_PUBLISHABLE_KEY {
            missing.push(IDENTITY_PUBLISHABLE_KEY);
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_values_fall_back_to_placeholders() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.data_api_url, PLACEHOLDER_DATA_URL);
        assert_eq!(config.identity_publishable_key, PLACEHOLDER_PUBLISHABLE_KEY);
        assert_eq!(config.auth_redirect_uri, DEFAULT_REDIRECT_URI);
        assert_eq!(config.identity_client_secret, None);
        assert_eq!(
            config.missing(),
            vec![DATA_API_URL, DATA_API_KEY, IDENTITY_PUBLISHABLE_KEY]
        );
    }

    #[test]
    fn test_values_are_read_and_blanks_ignored() {
        let config = AppConfig::from_lookup(lookup(&[
            (DATA_API_URL, "https://abc.supabase.co"),
            (DATA_API_KEY, "anon"),
            (IDENTITY_PUBLISHABLE_KEY, "pk_live_1"),
            (IDENTITY_CLIENT_SECRET, "  "),
            (AUTH_REDIRECT_URI, "https://spotlight.dev/auth/callback"),
        ]));
        assert!(config.missing().is_empty());
        assert_eq!(config.data_api_key, "anon");
        assert_eq!(config.identity_client_secret, None);
        assert_eq!(config.auth_redirect_uri, "https://spotlight.dev/auth/callback");
    }
}
