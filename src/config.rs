use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    /// Names the SQLite database file under the default data directory.
    pub const DB_NAME: &str = "DB_NAME";
    /// Explicit override for the full database path.
    pub const DATABASE_URL: &str = "DATABASE_URL";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 5000;
    pub const DB_NAME: &str = "quicknote_db";
    pub const DB_DIR: &str = "./.db";
}

/// Runtime configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var(env_vars::PORT)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults::PORT);

        // DATABASE_URL wins; otherwise derive the path from DB_NAME.
        let database_url = env::var(env_vars::DATABASE_URL).unwrap_or_else(|_| {
            let db_name =
                env::var(env_vars::DB_NAME).unwrap_or_else(|_| defaults::DB_NAME.to_string());
            PathBuf::from(defaults::DB_DIR)
                .join(format!("{}.db", db_name))
                .to_string_lossy()
                .to_string()
        });

        Self { port, database_url }
    }
}
