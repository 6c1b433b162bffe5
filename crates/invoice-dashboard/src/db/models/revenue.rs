//! Monthly revenue model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Revenue for one month (`month` is a short name such as `Jan`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}
