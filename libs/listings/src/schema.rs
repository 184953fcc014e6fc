//! Schema management for the listings store

use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

/// Apply any pending schema migrations.
///
/// Creates the `users` and `items` tables on first run; later runs are
/// no-ops unless new migrations ship with the crate.
pub async fn run_migrations(pool: &PgPool) -> DatabaseResult<()> {
    info!("Applying listings schema migrations");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))?;

    Ok(())
}
