//! `migrate` command: create the tower-sessions table.

use tower_sessions_sqlx_store::PostgresStore;

/// Create the sessions table if it does not exist.
///
/// # Errors
///
/// Returns an error if the database is unreachable or the migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    let store = PostgresStore::new(pool);
    store.migrate().await?;

    tracing::info!("sessions table ready");
    Ok(())
}
