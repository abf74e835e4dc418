//! Schema bootstrap for the cards table

use sqlx::PgPool;

use super::DbError;

/// Create the `cards` table if it does not exist.
///
/// Safe to run on every start; existing tables are left untouched.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring cards schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cards (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            x INTEGER NOT NULL,
            y INTEGER NOT NULL,
            template TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Cards schema ready");
    Ok(())
}
