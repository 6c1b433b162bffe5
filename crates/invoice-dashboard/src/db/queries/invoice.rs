//! Invoice database queries.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::db::models::{InvoiceFormRow, InvoiceStatusTotals, InvoicesTableRow, LatestInvoiceRaw};
use crate::db::DbPool;
use crate::error::AppResult;

/// Most recent invoices joined with their customer.
pub async fn latest_invoices(pool: &DbPool, limit: i64) -> AppResult<Vec<LatestInvoiceRaw>> {
    let rows = sqlx::query_as::<_, LatestInvoiceRaw>(
        r#"
        SELECT invoices.amount, customers.name, customers.image_url, customers.email, invoices.id
        FROM invoices
        JOIN customers ON invoices.customer_id = customers.id
        ORDER BY invoices.date DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Total number of invoices.
pub async fn count_invoices(pool: &DbPool) -> AppResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invoices")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Sums of paid and pending amounts, in cents.
pub async fn status_totals(pool: &DbPool) -> AppResult<InvoiceStatusTotals> {
    let totals = sqlx::query_as::<_, InvoiceStatusTotals>(
        r#"
        SELECT
            SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END) AS "paid",
            SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END) AS "pending"
        FROM invoices
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(totals)
}

/// One page of invoices matching `pattern` (an `ILIKE` pattern) on customer
/// name, email, amount, date or status, newest first.
pub async fn filtered_invoices(
    pool: &DbPool,
    pattern: &str,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<InvoicesTableRow>> {
    let rows = sqlx::query_as::<_, InvoicesTableRow>(
        r#"
        SELECT
            invoices.id,
            invoices.amount,
            invoices.date,
            invoices.status,
            customers.name,
            customers.email,
            customers.image_url
        FROM invoices
        JOIN customers ON invoices.customer_id = customers.id
        WHERE
            customers.name ILIKE $1 OR
            customers.email ILIKE $1 OR
            invoices.amount::text ILIKE $1 OR
            invoices.date::text ILIKE $1 OR
            invoices.status ILIKE $1
        ORDER BY invoices.date DESC
        LIMIT $3 OFFSET $2
        "#,
    )
    .bind(pattern)
    .bind(offset)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Number of invoices matching `pattern`, using the same filter as
/// [`filtered_invoices`].
pub async fn count_filtered_invoices(pool: &DbPool, pattern: &str) -> AppResult<i64> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM invoices
        JOIN customers ON invoices.customer_id = customers.id
        WHERE
            customers.name ILIKE $1 OR
            customers.email ILIKE $1 OR
            invoices.amount::text ILIKE $1 OR
            invoices.date::text ILIKE $1 OR
            invoices.status ILIKE $1
        "#,
    )
    .bind(pattern)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Get the editable fields of an invoice.
pub async fn get_invoice_form(pool: &DbPool, id: Uuid) -> AppResult<Option<InvoiceFormRow>> {
    let row = sqlx::query_as::<_, InvoiceFormRow>(
        r#"
        SELECT
            invoices.id,
            invoices.customer_id,
            invoices.amount,
            invoices.status
        FROM invoices
        WHERE invoices.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Insert a new invoice.
pub async fn insert_invoice(
    pool: &DbPool,
    customer_id: Uuid,
    amount: i32,
    status: &str,
    date: NaiveDate,
) -> AppResult<Uuid> {
    let result: (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO invoices (customer_id, amount, status, date)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(customer_id)
    .bind(amount)
    .bind(status)
    .bind(date)
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

/// Update customer, amount and status of an invoice.
pub async fn update_invoice(
    pool: &DbPool,
    id: Uuid,
    customer_id: Uuid,
    amount: i32,
    status: &str,
) -> AppResult<bool> {
    let result = sqlx::query(
        r#"
        UPDATE invoices
        SET customer_id = $2, amount = $3, status = $4
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(customer_id)
    .bind(amount)
    .bind(status)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete an invoice by ID.
pub async fn delete_invoice(pool: &DbPool, id: Uuid) -> AppResult<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM invoices
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
