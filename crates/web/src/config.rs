use anyhow::{Context, Result};

use crate::middleware::auth::ApiKeys;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3333;

/// Runtime settings for the check-in API, read from the environment.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Keys accepted on admin-only routes (gym registration, check-in validation)
    pub admin_api_keys: ApiKeys,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port.parse().context("PORT must be a number")?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL").context("Cannot load DATABASE_URL env variable")?,
            admin_api_keys: ApiKeys::from_comma_separated(&lookup("API_KEYS").unwrap_or_default()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
