use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Present selects the Postgres backend; absent falls back to the
    /// local file store at `data_path`.
    pub database_url: Option<String>,
    pub data_path: PathBuf,
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL").ok(),
            data_path: std::env::var("DATA_PATH")
                .unwrap_or_else(|_| "sportiva_results.json".to_string())
                .into(),
            admin_email: std::env::var("ADMIN_EMAIL")
                .context("Cannot load ADMIN_EMAIL env variable")?,
            admin_password: std::env::var("ADMIN_PASSWORD")
                .context("Cannot load ADMIN_PASSWORD env variable")?,
        })
    }
}
