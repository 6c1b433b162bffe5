//! Cryptography module for the Invoice Dashboard.
//!
//! Provides Argon2 password hashing for user credentials.

pub mod password;

pub use password::{hash_password, verify_password};
