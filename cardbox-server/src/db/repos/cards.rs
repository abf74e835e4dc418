//! Card repository
//!
//! Each operation is exactly one statement:
//! - insert/update use RETURNING (no re-select)
//! - update/delete report a missing row via the affected row count

use sqlx::PgConnection;

use crate::db::DbError;
use crate::models::{Card, CardSnapshot};

const RESOURCE: &str = "Card";

/// Card repository bound to a session's connection
pub struct CardRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> CardRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a new card; the database assigns `id` and `created_at`.
    pub async fn insert(&mut self, snapshot: &CardSnapshot) -> Result<Card, DbError> {
        let card = sqlx::query_as::<_, Card>(
            r#"
            INSERT INTO cards (name, x, y, template)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, x, y, template, created_at
            "#,
        )
        .bind(&snapshot.name)
        .bind(snapshot.x)
        .bind(snapshot.y)
        .bind(&snapshot.template)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(card)
    }

    /// All cards, newest first.
    pub async fn list(&mut self) -> Result<Vec<Card>, DbError> {
        let cards = sqlx::query_as::<_, Card>(
            r#"
            SELECT id, name, x, y, template, created_at
            FROM cards
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(cards)
    }

    pub async fn get(&mut self, id: i32) -> Result<Card, DbError> {
        sqlx::query_as::<_, Card>(
            r#"
            SELECT id, name, x, y, template, created_at
            FROM cards
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Overwrite every mutable column of an existing card.
    ///
    /// `id` and `created_at` are never written.
    pub async fn update(&mut self, id: i32, snapshot: &CardSnapshot) -> Result<Card, DbError> {
        sqlx::query_as::<_, Card>(
            r#"
            UPDATE cards
            SET name = $2, x = $3, y = $4, template = $5
            WHERE id = $1
            RETURNING id, name, x, y, template, created_at
            "#,
        )
        .bind(id)
        .bind(&snapshot.name)
        .bind(snapshot.x)
        .bind(snapshot.y)
        .bind(&snapshot.template)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&mut self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: i32) -> DbError {
    DbError::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    }
}
