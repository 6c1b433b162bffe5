//! Credential sign-in.
//!
//! A sign-in attempt is rejected as `InvalidCredentials` when the submitted
//! credentials are malformed, the user is unknown, or the password does not
//! match. Anything else (database down, corrupt hash) is `Unexpected`.

use thiserror::Error;

use crate::crypto::verify_password;
use crate::db::models::User;
use crate::db::queries::user as queries;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::forms::RawLoginForm;
use crate::result_ext::ResultExt;

/// Failure of a sign-in attempt.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Something went wrong.")]
    Unexpected(#[source] AppError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::Auth(err.to_string()),
            AuthError::Unexpected(_) => AppError::Operation(err.to_string()),
        }
    }
}

/// Service for user lookup and sign-in.
#[derive(Clone)]
pub struct AuthService {
    pool: DbPool,
}

impl AuthService {
    /// Create a new auth service.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Look up a user by email.
    pub async fn get_user(&self, email: &str) -> AppResult<Option<User>> {
        queries::get_user_by_email(&self.pool, email)
            .await
            .or_fail("Failed to fetch user.")
    }

    /// Sign in with an email/password form.
    pub async fn authenticate(&self, form: RawLoginForm) -> Result<User, AuthError> {
        let credentials = form
            .into_credentials()
            .ok_or(AuthError::InvalidCredentials)?;

        let user = self
            .get_user(&credentials.email)
            .await
            .map_err(AuthError::Unexpected)?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = verify_password(&credentials.password, &user.password)
            .log("verifying password")
            .map_err(AuthError::Unexpected)?;

        if !matches {
            tracing::info!(email = %credentials.email, "Rejected sign-in");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "User signed in");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::db::pool::create_lazy_pool;
    use crate::db::seed::seed_placeholder;

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials.");
        assert_eq!(
            AuthError::Unexpected(AppError::Internal("boom".into())).to_string(),
            "Something went wrong."
        );
    }

    #[test]
    fn test_auth_error_into_app_error() {
        match AppError::from(AuthError::InvalidCredentials) {
            AppError::Auth(msg) => assert_eq!(msg, "Invalid credentials."),
            other => panic!("unexpected: {:?}", other),
        }
        match AppError::from(AuthError::Unexpected(AppError::Internal("boom".into()))) {
            AppError::Operation(msg) => assert_eq!(msg, "Something went wrong."),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_credentials_rejected_without_lookup() {
        let config = DatabaseConfig {
            min_connections: 0,
            ..DatabaseConfig::default()
        };
        let service = AuthService::new(create_lazy_pool(&config));

        let form = RawLoginForm {
            email: Some("user@nextmail.com".to_string()),
            password: Some("123".to_string()),
        };

        assert!(matches!(
            service.authenticate(form).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
    async fn test_sign_in_against_seeded_user(pool: sqlx::PgPool) -> AppResult<()> {
        seed_placeholder(&pool).await?;
        let service = AuthService::new(pool);

        assert!(service.get_user("nobody@nextmail.com").await?.is_none());

        let form = |password: &str| RawLoginForm {
            email: Some("user@nextmail.com".to_string()),
            password: Some(password.to_string()),
        };
        let user = service.authenticate(form("123456")).await.unwrap();
        assert_eq!(user.name, "User");
        assert!(matches!(
            service.authenticate(form("1234567")).await,
            Err(AuthError::InvalidCredentials)
        ));
        Ok(())
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
    async fn test_corrupt_stored_hash_is_unexpected(pool: sqlx::PgPool) -> AppResult<()> {
        seed_placeholder(&pool).await?;
        sqlx::query("UPDATE users SET password = 'not-a-phc-string' WHERE email = $1")
            .bind("user@nextmail.com")
            .execute(&pool)
            .await?;

        let form = RawLoginForm {
            email: Some("user@nextmail.com".to_string()),
            password: Some("123456".to_string()),
        };
        assert!(matches!(
            AuthService::new(pool).authenticate(form).await,
            Err(AuthError::Unexpected(_))
        ));
        Ok(())
    }
}
