use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env if present
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host: IpAddr = env_or("SKETCHGRADE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SKETCHGRADE_HOST: {e}"))?;

        let port: u16 = env_or("SKETCHGRADE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid SKETCHGRADE_PORT: {e}"))?;

        let max_body_size: usize = env_or("SKETCHGRADE_MAX_BODY_SIZE", "262144")
            .parse()
            .map_err(|e| format!("Invalid SKETCHGRADE_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("SKETCHGRADE_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            max_body_size,
            log_level,
        })
    }
}
