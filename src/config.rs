use std::{env, path::PathBuf, time::Duration};

use anyhow::{Context, bail};
use secrecy::{ExposeSecret, SecretString};

const DEFAULT_MAX_BODY_BYTES: usize = 25 * 1024 * 1024;
const DEFAULT_SWEEP_GRACE_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Shared credential expected in the `admin_session` header.
    pub admin_secret: SecretString,
    pub upload_dir: PathBuf,
    pub max_body_bytes: usize,
    /// Minimum age before an unreferenced upload may be swept.
    pub sweep_grace: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let admin_secret =
            SecretString::from(env::var("ADMIN_SECRET").context("ADMIN_SECRET is not set")?);
        if admin_secret.expose_secret().is_empty() {
            bail!("ADMIN_SECRET must not be empty");
        }
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));
        let max_body_bytes = env::var("MAX_BODY_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);
        let sweep_grace = env::var("UPLOAD_SWEEP_GRACE_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_SWEEP_GRACE_SECS));
        Ok(Self {
            port,
            database_url,
            host,
            admin_secret,
            upload_dir,
            max_body_bytes,
            sweep_grace,
        })
    }
}
