//! CLI command implementations.

pub mod migrate;
pub mod prune;

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Resolve the session-store database URL the same way the site does:
/// `SITE_DATABASE_URL` first, then the generic `DATABASE_URL`.
fn database_url() -> Result<SecretString, Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    std::env::var("SITE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "SITE_DATABASE_URL (or DATABASE_URL) must be set".into())
}

/// Connect to the session-store database.
pub(crate) async fn connect() -> Result<PgPool, Box<dyn std::error::Error>> {
    let url = database_url()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(url.expose_secret())
        .await?;
    Ok(pool)
}
