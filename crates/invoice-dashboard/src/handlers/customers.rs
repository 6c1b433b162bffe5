//! Customer API handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::db::models::{CustomerField, FormattedCustomersTable};
use crate::error::AppResult;
use crate::services::CustomerService;

/// Query parameters for the customers table.
#[derive(Debug, Deserialize, Default)]
pub struct CustomersTableQuery {
    /// Free-text search on name and email
    #[serde(default)]
    pub query: String,
}

/// All customers as select options.
///
/// `GET /api/customers`
pub async fn list(State(service): State<CustomerService>) -> AppResult<Json<Vec<CustomerField>>> {
    Ok(Json(service.fetch_customers().await?))
}

/// Customers table with invoice totals.
///
/// `GET /api/customers/table?query=`
pub async fn table(
    State(service): State<CustomerService>,
    Query(params): Query<CustomersTableQuery>,
) -> AppResult<Json<Vec<FormattedCustomersTable>>> {
    Ok(Json(service.fetch_filtered_customers(&params.query).await?))
}
