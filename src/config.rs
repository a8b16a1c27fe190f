use std::net::IpAddr;

use chrono::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub session_ttl: Duration,
    pub session_sweep_secs: u64,
    pub secure_cookies: bool,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("BIZDESK_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid BIZDESK_HOST: {e}"))?;

        let port: u16 = env_or("BIZDESK_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid BIZDESK_PORT: {e}"))?;

        let ttl_minutes: i64 = env_or("BIZDESK_SESSION_TTL_MINUTES", "60")
            .parse()
            .map_err(|e| format!("Invalid BIZDESK_SESSION_TTL_MINUTES: {e}"))?;
        if ttl_minutes <= 0 {
            return Err("BIZDESK_SESSION_TTL_MINUTES must be positive".to_string());
        }

        let session_sweep_secs: u64 = env_or("BIZDESK_SESSION_SWEEP_SECS", "300")
            .parse()
            .map_err(|e| format!("Invalid BIZDESK_SESSION_SWEEP_SECS: {e}"))?;

        let secure_cookies = matches!(
            env_or("BIZDESK_SECURE_COOKIES", "false").as_str(),
            "1" | "true" | "yes"
        );

        let max_body_size: usize = env_or("BIZDESK_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid BIZDESK_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("BIZDESK_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            session_ttl: Duration::minutes(ttl_minutes),
            session_sweep_secs,
            secure_cookies,
            max_body_size,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
