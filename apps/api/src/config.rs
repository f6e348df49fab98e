use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// The single browser origin allowed by the CORS layer.
    pub allowed_origin: String,
    /// Logo PNG drawn at the top of the first page.
    pub logo_path: String,
    /// Directory served read-only under /generated.
    pub generated_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            allowed_origin: require_env("ALLOWED_ORIGIN")?,
            logo_path: std::env::var("LOGO_PATH").unwrap_or_else(|_| "assets/logo.png".to_string()),
            generated_dir: std::env::var("GENERATED_DIR")
                .unwrap_or_else(|_| "generated".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
