//! Revenue database queries.

use crate::db::models::Revenue;
use crate::db::DbPool;
use crate::error::AppResult;

/// All monthly revenue rows.
pub async fn list_revenue(pool: &DbPool) -> AppResult<Vec<Revenue>> {
    let rows = sqlx::query_as::<_, Revenue>("SELECT month, revenue FROM revenue")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
