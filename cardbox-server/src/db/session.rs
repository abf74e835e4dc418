//! Per-request units of work
//!
//! `Store` is created once at startup and cloned into every handler.
//! `Store::begin` opens a `Session` backed by its own transaction; an
//! uncommitted session rolls back when dropped and hands its connection
//! back to the pool.

use sqlx::{PgPool, Postgres, Transaction};

use super::{CardRepo, DbError};

/// Process-wide storage handle
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check out a connection and open a transaction on it
    pub async fn begin(&self) -> Result<Session, DbError> {
        let tx = self.pool.begin().await?;
        Ok(Session { tx })
    }
}

/// One transaction bound to one request
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    /// Card operations running inside this session
    pub fn cards(&mut self) -> CardRepo<'_> {
        CardRepo::new(&mut *self.tx)
    }

    pub async fn commit(self) -> Result<(), DbError> {
        self.tx.commit().await?;
        Ok(())
    }
}
