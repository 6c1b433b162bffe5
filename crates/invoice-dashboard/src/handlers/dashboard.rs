//! Dashboard overview handlers.
//!
//! Endpoints behind the revenue chart, the latest-invoices card and the
//! summary cards.

use axum::{extract::State, Json};

use crate::db::models::{CardData, LatestInvoice, Revenue};
use crate::error::AppResult;
use crate::services::DashboardService;

/// Monthly revenue.
///
/// `GET /api/revenue`
///
/// ```json
/// [{"month": "Jan", "revenue": 2000}, ...]
/// ```
pub async fn revenue(State(service): State<DashboardService>) -> AppResult<Json<Vec<Revenue>>> {
    Ok(Json(service.fetch_revenue().await?))
}

/// Five most recent invoices.
///
/// `GET /api/invoices/latest`
pub async fn latest_invoices(
    State(service): State<DashboardService>,
) -> AppResult<Json<Vec<LatestInvoice>>> {
    Ok(Json(service.fetch_latest_invoices().await?))
}

/// Summary cards.
///
/// `GET /api/cards`
///
/// ```json
/// {
///   "numberOfCustomers": 10,
///   "numberOfInvoices": 15,
///   "totalPaidInvoices": "$1,104.41",
///   "totalPendingInvoices": "$1,286.29"
/// }
/// ```
pub async fn cards(State(service): State<DashboardService>) -> AppResult<Json<CardData>> {
    Ok(Json(service.fetch_card_data().await?))
}
