//! Customer database queries.

use crate::db::models::{CustomerField, CustomersTableRow};
use crate::db::DbPool;
use crate::error::AppResult;

/// Total number of customers.
pub async fn count_customers(pool: &DbPool) -> AppResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// All customers as select options, ordered by name.
pub async fn list_customer_fields(pool: &DbPool) -> AppResult<Vec<CustomerField>> {
    let rows = sqlx::query_as::<_, CustomerField>(
        r#"
        SELECT id, name
        FROM customers
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Customers whose name or email matches `pattern`, with invoice counts and
/// pending/paid totals in cents.
pub async fn filtered_customers(pool: &DbPool, pattern: &str) -> AppResult<Vec<CustomersTableRow>> {
    let rows = sqlx::query_as::<_, CustomersTableRow>(
        r#"
        SELECT
            customers.id,
            customers.name,
            customers.email,
            customers.image_url,
            COUNT(invoices.id) AS total_invoices,
            SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END) AS total_pending,
            SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END) AS total_paid
        FROM customers
        LEFT JOIN invoices ON customers.id = invoices.customer_id
        WHERE
            customers.name ILIKE $1 OR
            customers.email ILIKE $1
        GROUP BY customers.id, customers.name, customers.email, customers.image_url
        ORDER BY customers.name ASC
        "#,
    )
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
