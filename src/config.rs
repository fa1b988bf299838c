use crate::domain::{error::ConfigError, models::credential::HashScheme};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Scheme used for new hashes; stored hashes of either scheme still verify
    pub password_scheme: HashScheme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            password_scheme: HashScheme::default(),
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment (after `.env` is loaded)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: port })?;
        }

        if let Some(scheme) = lookup("PASSWORD_SCHEME") {
            config.password_scheme = scheme.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PASSWORD_SCHEME",
                value: scheme,
            })?;
        }

        Ok(config)
    }
}
