use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// SQLite database file, created when missing.
    pub db_path: String,
    pub listen_addr: String,
}

impl Settings {
    /// Defaults overridden by `DB_PATH` / `LISTEN_ADDR`, including ones
    /// coming from a `.env` file.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_env(Environment::default())
    }

    pub fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("db_path", "trivia.db")?
            .set_default("listen_addr", "0.0.0.0:8080")?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}
