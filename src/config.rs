/// Runtime configuration, resolved once from the environment at startup.
///
/// The store backend follows `DATABASE_URL`: when set, repositories run
/// against PostgreSQL; when absent, the process-local store is used.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// PostgreSQL connection URL; `None` selects the in-memory store
    pub database_url: Option<String>,

    /// Maximum connections in the database pool
    pub pool_size: u32,
}

impl Config {
    /// Read configuration from the environment, with defaults
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        let database_url = std::env::var("DATABASE_URL").ok();

        let pool_size = std::env::var("DB_POOL_MAX_SIZE")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(10);

        Self {
            bind_addr,
            database_url,
            pool_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_environment() {
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("DB_POOL_MAX_SIZE");

        let config = Config::from_env();
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert!(config.database_url.is_none());
        assert_eq!(config.pool_size, 10);
    }
}
