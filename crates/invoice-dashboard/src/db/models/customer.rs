//! Customer database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Full customer row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Customer option for the invoice form's select box.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CustomerField {
    pub id: Uuid,
    pub name: String,
}

/// Aggregated customers-table row before formatting.
#[derive(Debug, Clone, FromRow)]
pub struct CustomersTableRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: Option<i64>,
    pub total_paid: Option<i64>,
}

/// Customers-table row with formatted totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedCustomersTable {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}
