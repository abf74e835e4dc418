//! Repository implementations for database access

pub mod cards;

pub use cards::CardRepo;
