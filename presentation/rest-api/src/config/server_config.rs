use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// HTTP listener address.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: address to bind (default: "127.0.0.1")
    /// - PORT: port to listen on (default: 3000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// An unparsable `PORT` is logged and replaced by the default rather than
    /// aborting startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ip = lookup("SERVICE_IP").unwrap_or_else(|| DEFAULT_IP.to_string());
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(port = %raw, default = DEFAULT_PORT, "Invalid PORT, using default");
                DEFAULT_PORT
            }),
        };

        Self { ip, port }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_listen_on_localhost_3000_by_default() {
        // Arrange
        let lookup = |_: &str| None;

        // Act
        let config = ServerConfig::from_lookup(lookup);

        // Assert
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn should_read_ip_and_port_from_environment() {
        let config = ServerConfig::from_lookup(|key| match key {
            "SERVICE_IP" => Some("0.0.0.0".to_string()),
            "PORT" => Some("5050".to_string()),
            _ => None,
        });

        assert_eq!(config.bind_address(), "0.0.0.0:5050");
    }

    #[test]
    fn should_fall_back_when_port_is_not_a_number() {
        let config = ServerConfig::from_lookup(|key| (key == "PORT").then(|| "http".to_string()));

        assert_eq!(config.port, 3000);
    }
}
