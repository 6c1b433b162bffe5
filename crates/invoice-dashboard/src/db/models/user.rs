//! User database model.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Dashboard user. `password` holds the Argon2 hash and is never serialized.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,

    #[serde(skip_serializing)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_not_serialized() {
        let user = User {
            id: Uuid::nil(),
            name: "User".to_string(),
            email: "user@nextmail.com".to_string(),
            password: "$argon2id$v=19$...".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("user@nextmail.com"));
        assert!(!json.contains("password"));
    }
}
