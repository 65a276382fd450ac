//! `prune` command: delete expired sessions.

use tower_sessions::ExpiredDeletion;
use tower_sessions_sqlx_store::PostgresStore;

/// Delete sessions whose expiry has passed.
///
/// Safe to run from cron; live sessions are untouched.
///
/// # Errors
///
/// Returns an error if the database is unreachable or the deletion fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    let store = PostgresStore::new(pool);
    store.delete_expired().await?;

    tracing::info!("expired sessions pruned");
    Ok(())
}
