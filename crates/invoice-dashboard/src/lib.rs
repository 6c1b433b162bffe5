//! Invoice Dashboard Library
//!
//! This crate provides the backend for the invoice dashboard:
//!
//! - **Overview data**: revenue by month, latest invoices, summary cards
//! - **Invoices**: searchable paginated listing, edit-form lookup, and
//!   form-driven create/update/delete
//! - **Customers**: select options and a searchable table with totals
//! - **Sign-in**: email/password check against Argon2 hashes
//! - **Seeding**: idempotent schema creation and fixture loading
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from environment variables
//! - [`db`]: Database connectivity, models, queries and seeding
//! - [`error`]: Custom error types with Axum integration
//! - [`forms`]: Form coercion and validation
//! - [`handlers`]: HTTP route handlers
//! - [`routes`]: Router assembly
//! - [`services`]: Business logic between handlers and queries
//! - [`state`]: Shared application state
//!
//! ## Example
//!
//! ```ignore
//! use invoice_dashboard::{
//!     config::{AppConfig, DatabaseConfig},
//!     db::create_pool,
//!     routes::build_router,
//!     state::AppState,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app_config = AppConfig::from_env()?;
//!     let db_config = DatabaseConfig::from_env()?;
//!     let db_pool = create_pool(&db_config).await?;
//!     let app = build_router(AppState::new(db_pool, app_config));
//!     // ... bind and serve
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crypto;
pub mod db;
pub mod error;
pub mod format;
pub mod forms;
pub mod handlers;
pub mod result_ext;
pub mod routes;
pub mod services;
pub mod state;

pub use error::{AppError, AppResult};
pub use result_ext::ResultExt;
