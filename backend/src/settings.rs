//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `BLOG_*` environment variables and optional
//! configuration files, in OrthoConfig's usual precedence.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DB_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime settings for the blog server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOG")]
pub struct AppSettings {
    /// Interface the HTTP server binds to.
    pub host: Option<String>,
    /// TCP port the HTTP server listens on.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// PostgreSQL connection string. Without one, documents are kept in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
}

impl AppSettings {
    /// Bind host, falling back to all interfaces.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Pool configuration when a database URL is set.
    #[must_use]
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?.trim();
        if url.is_empty() {
            return None;
        }
        Some(
            PoolConfig::new(url)
                .with_max_size(self.db_max_connections)
                .with_connection_timeout(DB_CONNECTION_TIMEOUT),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const KEYS: [&str; 4] = [
        "BLOG_HOST",
        "BLOG_PORT",
        "BLOG_DATABASE_URL",
        "BLOG_DB_MAX_CONNECTIONS",
    ];

    fn load_from_args(args: &[&str]) -> AppSettings {
        let argv = std::iter::once(OsString::from("blog-backend"))
            .chain(args.iter().map(OsString::from));
        AppSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(KEYS.map(|key| (key, None::<String>)));

        let settings = load_from_args(&[]);
        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.db_max_connections, 10);
        assert!(settings.pool_config().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("BLOG_HOST", Some("127.0.0.1".to_owned())),
            ("BLOG_PORT", Some("9090".to_owned())),
            (
                "BLOG_DATABASE_URL",
                Some("postgres://blog@localhost/blog".to_owned()),
            ),
            ("BLOG_DB_MAX_CONNECTIONS", Some("4".to_owned())),
        ]);

        let settings = load_from_args(&[]);
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port, 9090);
        let pool = settings.pool_config().expect("database configured");
        assert_eq!(pool.database_url(), "postgres://blog@localhost/blog");
        assert_eq!(pool.max_size(), 4);
    }

    #[rstest]
    fn cli_flags_override_environment() {
        let _guard = lock_env([
            ("BLOG_HOST", None::<String>),
            ("BLOG_PORT", Some("9090".to_owned())),
            ("BLOG_DATABASE_URL", None),
            ("BLOG_DB_MAX_CONNECTIONS", None),
        ]);

        let settings = load_from_args(&["--port", "7070"]);
        assert_eq!(settings.port, 7070);
    }

    #[rstest]
    fn blank_database_url_selects_in_memory_store() {
        let _guard = lock_env([
            ("BLOG_HOST", None::<String>),
            ("BLOG_PORT", None),
            ("BLOG_DATABASE_URL", Some("   ".to_owned())),
            ("BLOG_DB_MAX_CONNECTIONS", None),
        ]);

        assert!(load_from_args(&[]).pool_config().is_none());
    }
}
