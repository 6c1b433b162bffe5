//! Schema creation and fixture loading.
//!
//! Every table is created with `CREATE TABLE IF NOT EXISTS` and every fixture
//! row carries its key, so inserts use `ON CONFLICT DO NOTHING` and a second
//! run leaves the database unchanged.

use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::crypto::hash_password;
use crate::db::models::{Customer, Revenue};
use crate::error::AppResult;

/// Fixture data bundled with the crate.
pub const PLACEHOLDER_DATA: &str = include_str!("../../data/placeholder-data.json");

const CREATE_UUID_EXTENSION: &str = r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;

const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        image_url VARCHAR(255) NOT NULL
    )
"#;

const CREATE_INVOICES: &str = r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        customer_id UUID NOT NULL,
        amount INT NOT NULL,
        status VARCHAR(255) NOT NULL,
        date DATE NOT NULL
    )
"#;

const CREATE_REVENUE: &str = r#"
    CREATE TABLE IF NOT EXISTS revenue (
        month VARCHAR(4) NOT NULL UNIQUE,
        revenue INT NOT NULL
    )
"#;

/// A table the seeder knows how to create and fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SeedTable {
    Users,
    Customers,
    Invoices,
    Revenue,
}

impl SeedTable {
    /// All tables in seeding order.
    pub const ALL: [SeedTable; 4] = [
        SeedTable::Users,
        SeedTable::Customers,
        SeedTable::Invoices,
        SeedTable::Revenue,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SeedTable::Users => "users",
            SeedTable::Customers => "customers",
            SeedTable::Invoices => "invoices",
            SeedTable::Revenue => "revenue",
        }
    }
}

/// User fixture with a plaintext password, hashed on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct UserFixture {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Invoice fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceFixture {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: String,
    pub date: NaiveDate,
}

/// Complete fixture set.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixtures {
    pub users: Vec<UserFixture>,
    pub customers: Vec<Customer>,
    pub invoices: Vec<InvoiceFixture>,
    pub revenue: Vec<Revenue>,
}

impl Fixtures {
    /// Parse fixtures from JSON.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The fixtures bundled with the crate.
    pub fn placeholder() -> AppResult<Self> {
        Self::from_json(PLACEHOLDER_DATA)
    }
}

/// Outcome of seeding one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub table: SeedTable,

    /// Rows offered by the fixtures
    pub offered: usize,

    /// Rows actually inserted (conflicting rows are skipped)
    pub inserted: u64,
}

/// Create and fill the selected tables, in seeding order, on one connection.
///
/// # Errors
///
/// Stops at the first failing table and returns its error.
pub async fn seed(
    conn: &mut PgConnection,
    fixtures: &Fixtures,
    tables: &[SeedTable],
) -> AppResult<Vec<SeedReport>> {
    let mut reports = Vec::new();

    for table in SeedTable::ALL.into_iter().filter(|t| tables.contains(t)) {
        let report = match table {
            SeedTable::Users => seed_users(conn, fixtures).await,
            SeedTable::Customers => seed_customers(conn, fixtures).await,
            SeedTable::Invoices => seed_invoices(conn, fixtures).await,
            SeedTable::Revenue => seed_revenue(conn, fixtures).await,
        }
        .inspect_err(|e| {
            tracing::error!(table = table.name(), error = %e, "Error seeding {}", table.name())
        })?;

        tracing::info!(
            table = table.name(),
            offered = report.offered,
            inserted = report.inserted,
            "Seeded {}",
            table.name()
        );
        reports.push(report);
    }

    Ok(reports)
}

async fn create_table(conn: &mut PgConnection, table: SeedTable, ddl: &str) -> AppResult<()> {
    if table != SeedTable::Revenue {
        sqlx::query(CREATE_UUID_EXTENSION).execute(&mut *conn).await?;
    }
    sqlx::query(ddl).execute(&mut *conn).await?;

    tracing::info!(table = table.name(), "Created \"{}\" table", table.name());
    Ok(())
}

async fn seed_users(conn: &mut PgConnection, fixtures: &Fixtures) -> AppResult<SeedReport> {
    create_table(conn, SeedTable::Users, CREATE_USERS).await?;

    let mut inserted = 0;
    for user in &fixtures.users {
        let hashed_password = hash_password(&user.password)?;
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&hashed_password)
        .execute(&mut *conn)
        .await?;
        inserted += result.rows_affected();
    }

    Ok(SeedReport {
        table: SeedTable::Users,
        offered: fixtures.users.len(),
        inserted,
    })
}

async fn seed_customers(conn: &mut PgConnection, fixtures: &Fixtures) -> AppResult<SeedReport> {
    create_table(conn, SeedTable::Customers, CREATE_CUSTOMERS).await?;

    let mut inserted = 0;
    for customer in &fixtures.customers {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.image_url)
        .execute(&mut *conn)
        .await?;
        inserted += result.rows_affected();
    }

    Ok(SeedReport {
        table: SeedTable::Customers,
        offered: fixtures.customers.len(),
        inserted,
    })
}

async fn seed_invoices(conn: &mut PgConnection, fixtures: &Fixtures) -> AppResult<SeedReport> {
    create_table(conn, SeedTable::Invoices, CREATE_INVOICES).await?;

    let mut inserted = 0;
    for invoice in &fixtures.invoices {
        let result = sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(invoice.id)
        .bind(invoice.customer_id)
        .bind(invoice.amount)
        .bind(&invoice.status)
        .bind(invoice.date)
        .execute(&mut *conn)
        .await?;
        inserted += result.rows_affected();
    }

    Ok(SeedReport {
        table: SeedTable::Invoices,
        offered: fixtures.invoices.len(),
        inserted,
    })
}

async fn seed_revenue(conn: &mut PgConnection, fixtures: &Fixtures) -> AppResult<SeedReport> {
    create_table(conn, SeedTable::Revenue, CREATE_REVENUE).await?;

    let mut inserted = 0;
    for rev in &fixtures.revenue {
        let result = sqlx::query(
            r#"
            INSERT INTO revenue (month, revenue)
            VALUES ($1, $2)
            ON CONFLICT (month) DO NOTHING
            "#,
        )
        .bind(&rev.month)
        .bind(rev.revenue)
        .execute(&mut *conn)
        .await?;
        inserted += result.rows_affected();
    }

    Ok(SeedReport {
        table: SeedTable::Revenue,
        offered: fixtures.revenue.len(),
        inserted,
    })
}

/// Seed every table from the bundled fixtures.
#[cfg(test)]
pub(crate) async fn seed_placeholder(pool: &sqlx::PgPool) -> AppResult<()> {
    let mut conn = pool.acquire().await?;
    seed(&mut conn, &Fixtures::placeholder()?, &SeedTable::ALL).await?;
    Ok(())
}
