use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub db_max_connections: u32,
    pub max_body_size: usize,
    pub seed_file: Option<PathBuf>,
    pub notify: NotifyConfig,
}

/// Contact-form notification settings. Notifications are sent only when
/// `enabled` is set and both `recipient` and `smtp` are present.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    pub enabled: bool,
    pub recipient: Option<String>,
    pub timeout: Duration,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: Option<String>,
    pub tls: TlsMode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TlsMode {
    StartTls,
    Tls,
    None,
}

impl NotifyConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            recipient: None,
            timeout: Duration::from_secs(10),
            smtp: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = lookup("DATABASE_URL")
            .ok_or("Missing required environment variable: DATABASE_URL")?;

        let host: IpAddr = env_or("PORTFOLIO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_HOST: {e}"))?;

        let port: u16 = env_or("PORTFOLIO_PORT", "8080")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_PORT: {e}"))?;

        let log_level = env_or("PORTFOLIO_LOG_LEVEL", "info");

        let db_max_connections: u32 = env_or("PORTFOLIO_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_DB_MAX_CONNECTIONS: {e}"))?;

        let max_body_size: usize = env_or("PORTFOLIO_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_MAX_BODY_SIZE: {e}"))?;

        let seed_file = lookup("PORTFOLIO_SEED_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let enabled = match env_or("PORTFOLIO_EMAIL_ENABLED", "false").to_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" | "" => false,
            other => return Err(format!("Invalid PORTFOLIO_EMAIL_ENABLED: {other}")),
        };

        let recipient = lookup("PORTFOLIO_EMAIL_RECIPIENT").filter(|s| !s.trim().is_empty());

        let timeout_secs: u64 = env_or("PORTFOLIO_NOTIFY_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_NOTIFY_TIMEOUT_SECS: {e}"))?;

        let tls = match env_or("PORTFOLIO_SMTP_TLS", "starttls").as_str() {
            "starttls" => TlsMode::StartTls,
            "tls" => TlsMode::Tls,
            "none" => TlsMode::None,
            other => return Err(format!("Invalid PORTFOLIO_SMTP_TLS: {other}")),
        };

        let smtp = match (
            lookup("PORTFOLIO_SMTP_HOST"),
            lookup("PORTFOLIO_SMTP_PORT"),
            lookup("PORTFOLIO_SMTP_USER"),
            lookup("PORTFOLIO_SMTP_PASS"),
        ) {
            (Some(host), Some(port), Some(user), Some(pass)) => Some(SmtpConfig {
                host,
                port: port
                    .parse()
                    .map_err(|e| format!("Invalid PORTFOLIO_SMTP_PORT: {e}"))?,
                user,
                pass,
                from: lookup("PORTFOLIO_SMTP_FROM").filter(|s| !s.trim().is_empty()),
                tls,
            }),
            _ => None,
        };

        Ok(Config {
            database_url,
            host,
            port,
            log_level,
            db_max_connections,
            max_body_size,
            seed_file,
            notify: NotifyConfig {
                enabled,
                recipient,
                timeout: Duration::from_secs(timeout_secs),
                smtp,
            },
        })
    }
}
