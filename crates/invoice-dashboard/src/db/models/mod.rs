//! Database models for the Invoice Dashboard.
//!
//! This module contains SQLx-compatible row types and the view models
//! built from them.

pub mod customer;
pub mod invoice;
pub mod revenue;
pub mod user;

pub use customer::*;
pub use invoice::*;
pub use revenue::*;
pub use user::*;
