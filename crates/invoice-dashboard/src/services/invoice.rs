//! Invoice service: listing, lookup and form-driven writes.

use chrono::Utc;
use uuid::Uuid;

use crate::db::models::{InvoiceForm, InvoiceFormRow, InvoicesTableRow};
use crate::db::queries::invoice as queries;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::format::cents_to_dollars;
use crate::forms::{RawInvoiceForm, CREATE_FAILED_MESSAGE, UPDATE_FAILED_MESSAGE};
use crate::result_ext::ResultExt;
use crate::services::pagination::{page_offset, search_pattern, total_pages, ITEMS_PER_PAGE};

/// Listing page that shows invoices; writes send the browser back here.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Service for invoice operations.
#[derive(Clone)]
pub struct InvoiceService {
    pool: DbPool,
}

impl InvoiceService {
    /// Create a new invoice service.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// One page of invoices matching `query`, newest first.
    pub async fn fetch_filtered_invoices(
        &self,
        query: &str,
        current_page: i64,
    ) -> AppResult<Vec<InvoicesTableRow>> {
        queries::filtered_invoices(
            &self.pool,
            &search_pattern(query),
            ITEMS_PER_PAGE,
            page_offset(current_page),
        )
        .await
        .or_fail("Failed to fetch filtered invoices.")
    }

    /// Number of pages the filtered listing spans.
    pub async fn fetch_invoices_pages(&self, query: &str) -> AppResult<i64> {
        let count = queries::count_filtered_invoices(&self.pool, &search_pattern(query))
            .await
            .or_fail("Failed to fetch total number of invoice pages.")?;

        Ok(total_pages(count))
    }

    /// Invoice prepared for the edit form, amount in dollars.
    pub async fn fetch_invoice_by_id(&self, id: Uuid) -> AppResult<Option<InvoiceForm>> {
        let row = queries::get_invoice_form(&self.pool, id)
            .await
            .or_fail("Failed to fetch invoice by ID.")?;

        Ok(row.map(invoice_form))
    }

    /// Validate and insert a new invoice dated today (UTC).
    pub async fn create_invoice(&self, form: RawInvoiceForm) -> AppResult<Uuid> {
        let submission = form
            .validate_with(CREATE_FAILED_MESSAGE)
            .map_err(AppError::InvalidForm)?;
        let date = Utc::now().date_naive();

        tracing::info!(
            customer_id = %submission.customer_id,
            amount_in_cents = submission.amount_in_cents,
            status = %submission.status,
            date = %date,
            "Creating invoice"
        );

        let id = queries::insert_invoice(
            &self.pool,
            submission.customer_id,
            submission.amount_in_cents,
            submission.status.as_str(),
            date,
        )
        .await
        .or_fail("Failed to create invoice.")?;

        Ok(id)
    }

    /// Validate and apply an edit to an existing invoice.
    pub async fn update_invoice(&self, id: Uuid, form: RawInvoiceForm) -> AppResult<()> {
        let submission = form
            .validate_with(UPDATE_FAILED_MESSAGE)
            .map_err(AppError::InvalidForm)?;

        let updated = queries::update_invoice(
            &self.pool,
            id,
            submission.customer_id,
            submission.amount_in_cents,
            submission.status.as_str(),
        )
        .await
        .or_fail("Failed to update invoice.")?;

        if !updated {
            return Err(AppError::NotFound(format!("Invoice '{}' not found", id)));
        }

        tracing::info!(invoice_id = %id, "Updated invoice");
        Ok(())
    }

    /// Delete an invoice. Deleting an absent invoice is not an error.
    pub async fn delete_invoice(&self, id: Uuid) -> AppResult<()> {
        let deleted = queries::delete_invoice(&self.pool, id)
            .await
            .or_fail("Failed to delete invoice.")?;

        if deleted {
            tracing::info!(invoice_id = %id, "Deleted invoice");
        } else {
            tracing::warn!(invoice_id = %id, "Invoice to delete was already gone");
        }
        Ok(())
    }
}

fn invoice_form(row: InvoiceFormRow) -> InvoiceForm {
    InvoiceForm {
        id: row.id,
        customer_id: row.customer_id,
        amount: cents_to_dollars(row.amount),
        status: row.status,
    }
}
