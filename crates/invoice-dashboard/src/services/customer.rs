//! Customer service.

use crate::db::models::{CustomerField, CustomersTableRow, FormattedCustomersTable};
use crate::db::queries::customer as queries;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::format::format_currency;
use crate::result_ext::ResultExt;
use crate::services::pagination::search_pattern;

/// Service for customer listings.
#[derive(Clone)]
pub struct CustomerService {
    pool: DbPool,
}

impl CustomerService {
    /// Create a new customer service.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All customers as `{id, name}` options, ordered by name.
    pub async fn fetch_customers(&self) -> AppResult<Vec<CustomerField>> {
        queries::list_customer_fields(&self.pool)
            .await
            .or_fail("Failed to fetch all customers.")
    }

    /// Customers matching `query` with formatted invoice totals.
    pub async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> AppResult<Vec<FormattedCustomersTable>> {
        let rows = queries::filtered_customers(&self.pool, &search_pattern(query))
            .await
            .or_fail("Failed to fetch filtered customers.")?;

        Ok(rows.into_iter().map(format_customer_row).collect())
    }
}

fn format_customer_row(row: CustomersTableRow) -> FormattedCustomersTable {
    FormattedCustomersTable {
        id: row.id,
        name: row.name,
        email: row.email,
        image_url: row.image_url,
        total_invoices: row.total_invoices,
        total_pending: format_currency(row.total_pending.unwrap_or(0)),
        total_paid: format_currency(row.total_paid.unwrap_or(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_customer_without_invoices_formats_zero() {
        let row = CustomersTableRow {
            id: Uuid::nil(),
            name: "Amy Burns".to_string(),
            email: "amy@burns.com".to_string(),
            image_url: "/customers/amy-burns.png".to_string(),
            total_invoices: 0,
            total_pending: None,
            total_paid: None,
        };

        let formatted = format_customer_row(row);
        assert_eq!(formatted.total_invoices, 0);
        assert_eq!(formatted.total_pending, "$0.00");
        assert_eq!(formatted.total_paid, "$0.00");
    }

    #[test]
    fn test_customer_totals_formatted() {
        let row = CustomersTableRow {
            id: Uuid::nil(),
            name: "Steven Tey".to_string(),
            email: "steven@tey.com".to_string(),
            image_url: "/customers/steven-tey.png".to_string(),
            total_invoices: 2,
            total_pending: Some(0),
            total_paid: Some(77345),
        };

        let formatted = format_customer_row(row);
        assert_eq!(formatted.total_paid, "$773.45");
    }
}
