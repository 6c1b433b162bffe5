//! Database module for the Invoice Dashboard server.
//!
//! This module provides database connectivity, models, queries and the
//! schema/fixture seeder for PostgreSQL using SQLx.

pub mod models;
pub mod pool;
pub mod queries;
pub mod seed;

pub use pool::{create_pool, DbPool};
