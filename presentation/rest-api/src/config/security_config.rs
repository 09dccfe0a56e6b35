use std::env;

/// Shared secret every request must present in `x-api-key`.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub api_key: String,
}

impl SecurityConfig {
    /// Environment variables:
    /// - API_KEY: expected header value (default: "12345")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup("API_KEY")
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| "12345".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_default_key() {
        assert_eq!(SecurityConfig::from_lookup(|_| None).api_key, "12345");
        assert_eq!(
            SecurityConfig::from_lookup(|_| Some(String::new())).api_key,
            "12345"
        );
    }

    #[test]
    fn should_read_key_from_environment() {
        let config = SecurityConfig::from_lookup(|_| Some("s3cret".to_string()));

        assert_eq!(config.api_key, "s3cret");
    }
}
