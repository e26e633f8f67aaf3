//! Configuration module for the Vimarsh backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;

/// Where content records are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Local SQLite content table, optionally seeded from a JSON file at startup
    Sqlite {
        db_path: PathBuf,
        seed_path: Option<PathBuf>,
    },
    /// Remote hosted content store
    Remote {
        base_url: String,
        api_key: Option<String>,
    },
}

/// Credentials for the backend-as-a-service table behind the join form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationsConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Content store backend selection
    pub content: ContentSource,
    /// Request timeout for the remote content store
    pub store_timeout: Duration,
    /// Application table credentials; `None` disables the join form
    pub applications: Option<ApplicationsConfig>,
    /// Secret that unlocks the members pages; `None` keeps the gate closed
    pub member_session_secret: Option<String>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let content = match non_empty_var("VIMARSH_CONTENT_STORE_URL") {
            Some(base_url) => ContentSource::Remote {
                base_url: base_url.trim_end_matches('/').to_string(),
                api_key: non_empty_var("VIMARSH_CONTENT_STORE_KEY"),
            },
            None => ContentSource::Sqlite {
                db_path: env::var("VIMARSH_CONTENT_DB_PATH")
                    .unwrap_or_else(|_| "./data/content.sqlite".to_string())
                    .into(),
                seed_path: non_empty_var("VIMARSH_CONTENT_SEED_PATH").map(PathBuf::from),
            },
        };

        let store_timeout = match non_empty_var("VIMARSH_STORE_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map(Duration::from_secs).map_err(|_| {
                AppError::Validation(format!("Invalid VIMARSH_STORE_TIMEOUT_SECS: {}", raw))
            })?,
            None => Duration::from_secs(15),
        };

        // Both halves are required, same as the hosted client it replaces
        let applications = match (
            non_empty_var("VIMARSH_SUPABASE_URL"),
            non_empty_var("VIMARSH_SUPABASE_ANON_KEY"),
        ) {
            (Some(url), Some(anon_key)) => Some(ApplicationsConfig {
                url: url.trim_end_matches('/').to_string(),
                anon_key,
                table: env::var("VIMARSH_APPLICATIONS_TABLE")
                    .unwrap_or_else(|_| "members".to_string()),
            }),
            _ => None,
        };

        let member_session_secret = non_empty_var("VIMARSH_MEMBER_SESSION_SECRET");

        let raw_bind =
            env::var("VIMARSH_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = raw_bind
            .parse()
            .map_err(|_| AppError::Validation(format!("Invalid VIMARSH_BIND_ADDR: {}", raw_bind)))?;

        let log_level = env::var("VIMARSH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            content,
            store_timeout,
            applications,
            member_session_secret,
            bind_addr,
            log_level,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    // Tests in this module mutate process-wide environment variables
    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const VARS: &[&str] = &[
        "VIMARSH_CONTENT_STORE_URL",
        "VIMARSH_CONTENT_STORE_KEY",
        "VIMARSH_CONTENT_DB_PATH",
        "VIMARSH_CONTENT_SEED_PATH",
        "VIMARSH_STORE_TIMEOUT_SECS",
        "VIMARSH_SUPABASE_URL",
        "VIMARSH_SUPABASE_ANON_KEY",
        "VIMARSH_APPLICATIONS_TABLE",
        "VIMARSH_MEMBER_SESSION_SECRET",
        "VIMARSH_BIND_ADDR",
        "VIMARSH_LOG_LEVEL",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(
            config.content,
            ContentSource::Sqlite {
                db_path: PathBuf::from("./data/content.sqlite"),
                seed_path: None,
            }
        );
        assert_eq!(config.store_timeout, Duration::from_secs(15));
        assert!(config.applications.is_none());
        assert!(config.member_session_secret.is_none());
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_remote_store_and_applications() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("VIMARSH_CONTENT_STORE_URL", "https://cms.example.com/api/");
        env::set_var("VIMARSH_CONTENT_STORE_KEY", "cms-key");
        env::set_var("VIMARSH_SUPABASE_URL", "https://abc.supabase.co");
        env::set_var("VIMARSH_SUPABASE_ANON_KEY", "anon");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(
            config.content,
            ContentSource::Remote {
                base_url: "https://cms.example.com/api".to_string(),
                api_key: Some("cms-key".to_string()),
            }
        );
        let applications = config.applications.unwrap();
        assert_eq!(applications.url, "https://abc.supabase.co");
        assert_eq!(applications.table, "members");
    }

    #[test]
    fn test_half_configured_applications_are_absent() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("VIMARSH_SUPABASE_URL", "https://abc.supabase.co");

        let config = Config::from_env().unwrap();
        clear_env();

        assert!(config.applications.is_none());
    }

    #[test]
    fn test_invalid_bind_addr() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("VIMARSH_BIND_ADDR", "not-an-address");

        let result = Config::from_env();
        clear_env();

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
