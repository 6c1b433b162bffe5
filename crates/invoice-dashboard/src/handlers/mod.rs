//! HTTP handlers for the Invoice Dashboard API.
//!
//! This module contains all route handlers organized by domain.

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod invoices;

pub use health::{api_health, health_check};
