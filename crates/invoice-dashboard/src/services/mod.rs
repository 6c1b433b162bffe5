//! Service layer for the Invoice Dashboard.
//!
//! Services encapsulate business logic and coordinate
//! between handlers and database queries.

pub mod auth;
pub mod customer;
pub mod dashboard;
pub mod invoice;
pub mod pagination;

pub use auth::{AuthError, AuthService};
pub use customer::CustomerService;
pub use dashboard::DashboardService;
pub use invoice::InvoiceService;
