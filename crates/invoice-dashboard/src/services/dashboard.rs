//! Overview data: revenue chart, latest invoices and summary cards.

use crate::db::models::{CardData, LatestInvoice, LatestInvoiceRaw, Revenue};
use crate::db::queries::{
    customer as customer_queries, invoice as invoice_queries, revenue as revenue_queries,
};
use crate::db::DbPool;
use crate::error::AppResult;
use crate::format::format_currency;
use crate::result_ext::ResultExt;

/// Number of invoices shown on the latest-invoices card.
pub const LATEST_INVOICES_LIMIT: i64 = 5;

/// Service for the dashboard overview.
#[derive(Clone)]
pub struct DashboardService {
    pool: DbPool,
}

impl DashboardService {
    /// Create a new dashboard service.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Monthly revenue.
    pub async fn fetch_revenue(&self) -> AppResult<Vec<Revenue>> {
        tracing::debug!("Fetching revenue data");

        let rows = revenue_queries::list_revenue(&self.pool)
            .await
            .or_fail("Failed to fetch revenue data.")?;

        tracing::debug!(months = rows.len(), "Revenue fetch completed");
        Ok(rows)
    }

    /// The most recent invoices with formatted amounts.
    pub async fn fetch_latest_invoices(&self) -> AppResult<Vec<LatestInvoice>> {
        let rows = invoice_queries::latest_invoices(&self.pool, LATEST_INVOICES_LIMIT)
            .await
            .or_fail("Failed to fetch the latest invoices.")?;

        Ok(rows.into_iter().map(latest_invoice).collect())
    }

    /// Counts and paid/pending totals. The three queries run concurrently.
    pub async fn fetch_card_data(&self) -> AppResult<CardData> {
        let (number_of_invoices, number_of_customers, totals) = tokio::try_join!(
            invoice_queries::count_invoices(&self.pool),
            customer_queries::count_customers(&self.pool),
            invoice_queries::status_totals(&self.pool),
        )
        .or_fail("Failed to fetch card data.")?;

        Ok(CardData {
            number_of_customers,
            number_of_invoices,
            total_paid_invoices: format_currency(totals.paid.unwrap_or(0)),
            total_pending_invoices: format_currency(totals.pending.unwrap_or(0)),
        })
    }
}

fn latest_invoice(raw: LatestInvoiceRaw) -> LatestInvoice {
    LatestInvoice {
        id: raw.id,
        name: raw.name,
        image_url: raw.image_url,
        email: raw.email,
        amount: format_currency(i64::from(raw.amount)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::{seed, seed_placeholder, Fixtures, SeedTable};
    use uuid::Uuid;

    #[test]
    fn test_latest_invoice_formats_amount() {
        let raw = LatestInvoiceRaw {
            id: Uuid::nil(),
            name: "Delba de Oliveira".to_string(),
            image_url: "/customers/delba-de-oliveira.png".to_string(),
            email: "delba@oliveira.com".to_string(),
            amount: 15795,
        };

        let invoice = latest_invoice(raw);
        assert_eq!(invoice.amount, "$157.95");
        assert_eq!(invoice.name, "Delba de Oliveira");
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
    async fn test_card_data_on_empty_tables(pool: sqlx::PgPool) -> AppResult<()> {
        let mut conn = pool.acquire().await?;
        let empty = Fixtures::from_json(r#"{"users":[],"customers":[],"invoices":[],"revenue":[]}"#)?;
        seed(&mut conn, &empty, &SeedTable::ALL).await?;
        drop(conn);

        let cards = DashboardService::new(pool).fetch_card_data().await?;
        assert_eq!(cards.number_of_customers, 0);
        assert_eq!(cards.number_of_invoices, 0);
        assert_eq!(cards.total_paid_invoices, "$0.00");
        assert_eq!(cards.total_pending_invoices, "$0.00");
        Ok(())
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
    async fn test_overview_on_placeholder_data(pool: sqlx::PgPool) -> AppResult<()> {
        seed_placeholder(&pool).await?;
        let service = DashboardService::new(pool);

        assert_eq!(service.fetch_revenue().await?.len(), 12);

        let latest = service.fetch_latest_invoices().await?;
        assert_eq!(latest.len() as i64, LATEST_INVOICES_LIMIT);
        assert!(latest.iter().all(|invoice| invoice.amount.starts_with('$')));

        let cards = service.fetch_card_data().await?;
        assert_eq!(cards.number_of_customers, 10);
        assert_eq!(cards.number_of_invoices, 15);
        Ok(())
    }
}
