use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub db_url: String,
    pub max_connections: u32,
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    fn get_env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
        match env::var(key) {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
            Err(_) => Ok(default),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Ok(EnvConfig {
            host: Self::get_env_or("HOST", "0.0.0.0".to_string())?,
            port: Self::get_env_or("PORT", 8080)?,
            db_url: Self::get_env("DATABASE_URL")?,
            max_connections: Self::get_env_or("DB_MAX_CONNECTIONS", 10)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_keys_fall_back_to_defaults() {
        let port: u16 = EnvConfig::get_env_or("TASKHUB_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
        assert!(matches!(
            EnvConfig::get_env("TASKHUB_TEST_UNSET_URL"),
            Err(ConfigError::Missing("TASKHUB_TEST_UNSET_URL"))
        ));
    }

    #[test]
    fn unparsable_numbers_are_rejected() {
        env::set_var("TASKHUB_TEST_BAD_PORT", "eighty");
        let res: Result<u16, _> = EnvConfig::get_env_or("TASKHUB_TEST_BAD_PORT", 8080);
        assert!(matches!(res, Err(ConfigError::Invalid { key: "TASKHUB_TEST_BAD_PORT", .. })));
    }
}
