//! Invoice API handlers and form actions.
//!
//! Read endpoints answer JSON. The form actions accept
//! `application/x-www-form-urlencoded` bodies and, on success, answer
//! `303 See Other` to the invoices listing so the browser re-fetches it.

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::models::{InvoiceForm, InvoicesTableRow};
use crate::error::{AppError, AppResult};
use crate::forms::RawInvoiceForm;
use crate::services::invoice::INVOICES_PATH;
use crate::services::InvoiceService;

/// Query parameters for the invoices listing.
#[derive(Debug, Deserialize, Default)]
pub struct ListInvoicesQuery {
    /// Free-text search
    #[serde(default)]
    pub query: String,

    /// 1-based page number
    pub page: Option<i64>,
}

/// Query parameters for the page count.
#[derive(Debug, Deserialize, Default)]
pub struct PagesQuery {
    /// Free-text search
    #[serde(default)]
    pub query: String,
}

/// Page count response.
#[derive(Debug, Serialize, Deserialize)]
pub struct PagesResponse {
    pub total_pages: i64,
}

/// List invoices matching a search, one page at a time.
///
/// `GET /api/invoices?query=lee&page=2`
pub async fn list(
    State(service): State<InvoiceService>,
    Query(params): Query<ListInvoicesQuery>,
) -> AppResult<Json<Vec<InvoicesTableRow>>> {
    let rows = service
        .fetch_filtered_invoices(&params.query, params.page.unwrap_or(1))
        .await?;
    Ok(Json(rows))
}

/// Number of listing pages for a search.
///
/// `GET /api/invoices/pages?query=lee`
pub async fn pages(
    State(service): State<InvoiceService>,
    Query(params): Query<PagesQuery>,
) -> AppResult<Json<PagesResponse>> {
    let total_pages = service.fetch_invoices_pages(&params.query).await?;
    Ok(Json(PagesResponse { total_pages }))
}

/// Invoice prepared for the edit form.
///
/// `GET /api/invoices/{id}`
///
/// Returns `404` when the invoice does not exist.
pub async fn get(
    State(service): State<InvoiceService>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<InvoiceForm>> {
    service
        .fetch_invoice_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Invoice '{}' not found", id)))
}

/// Create an invoice from the form.
///
/// `POST /dashboard/invoices/create`
///
/// Invalid input answers `422` with the form state.
pub async fn create(
    State(service): State<InvoiceService>,
    Form(form): Form<RawInvoiceForm>,
) -> AppResult<Redirect> {
    service.create_invoice(form).await?;
    Ok(Redirect::to(INVOICES_PATH))
}

/// Apply the edit form to an invoice.
///
/// `POST /dashboard/invoices/{id}/edit`
pub async fn update(
    State(service): State<InvoiceService>,
    Path(id): Path<Uuid>,
    Form(form): Form<RawInvoiceForm>,
) -> AppResult<Redirect> {
    service.update_invoice(id, form).await?;
    Ok(Redirect::to(INVOICES_PATH))
}

/// Delete an invoice.
///
/// `POST /dashboard/invoices/{id}/delete`
pub async fn delete(
    State(service): State<InvoiceService>,
    Path(id): Path<Uuid>,
) -> AppResult<Redirect> {
    service.delete_invoice(id).await?;
    Ok(Redirect::to(INVOICES_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let params: ListInvoicesQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(params.query, "");
        assert!(params.page.is_none());
    }

    #[test]
    fn test_pages_response_serialization() {
        let json = serde_json::to_string(&PagesResponse { total_pages: 3 }).unwrap();
        assert_eq!(json, r#"{"total_pages":3}"#);
    }
}
