use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5555;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` is required. `HOST` and `PORT` fall back to `127.0.0.1:5555`.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_port(std::env::var("PORT").ok())?,
        })
    }

    /// Address the HTTP listener binds to, in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: "PORT".to_string(),
            value,
        }),
    }
}
