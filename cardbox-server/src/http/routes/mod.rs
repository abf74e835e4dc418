//! Route handlers organized by resource

pub mod cards;
pub mod health;
