//! Database layer - connection pool, schema and repositories
//!
//! - One shared `PgPool` for the process, wrapped in a `Store`
//! - Every request works inside its own `Session` (one transaction)
//! - One statement per operation; no check-then-write

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod session;

pub use error::DbError;
pub use pool::{create_pool, PoolOptions};
pub use repos::CardRepo;
pub use schema::ensure_schema;
pub use session::{Session, Store};
