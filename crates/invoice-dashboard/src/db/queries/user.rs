//! User database queries.

use crate::db::models::User;
use crate::db::DbPool;
use crate::error::AppResult;

/// Get a user by email.
pub async fn get_user_by_email(pool: &DbPool, email: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
