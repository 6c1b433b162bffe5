//! Invoice database models.
//!
//! Amounts are stored in cents (`INT`). Listing rows keep raw cents; the
//! latest-invoices card carries a formatted amount and the edit form carries
//! dollars.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Invoice payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row of the latest-invoices query before formatting.
#[derive(Debug, Clone, FromRow)]
pub struct LatestInvoiceRaw {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: i32,
}

/// Latest invoice card entry with a formatted amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub email: String,

    /// Formatted, e.g. `$1,234.56`
    pub amount: String,
}

/// Row of the paginated invoices table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InvoicesTableRow {
    pub id: Uuid,

    /// Amount in cents
    pub amount: i32,

    pub date: NaiveDate,
    pub status: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Invoice row used to prefill the edit form.
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceFormRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: String,
}

/// Edit form payload; `amount` is in dollars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceForm {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: f64,
    pub status: String,
}

/// Dashboard summary cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub number_of_customers: i64,
    pub number_of_invoices: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

/// Paid/pending sums in cents. `SUM` over no rows yields NULL.
#[derive(Debug, Clone, Default, FromRow)]
pub struct InvoiceStatusTotals {
    pub paid: Option<i64>,
    pub pending: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_strings() {
        assert_eq!(InvoiceStatus::parse("paid"), Some(InvoiceStatus::Paid));
        assert_eq!(InvoiceStatus::parse("pending"), Some(InvoiceStatus::Pending));
        assert_eq!(InvoiceStatus::parse("Paid"), None);
        assert_eq!(InvoiceStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn test_card_data_uses_camel_case() {
        let cards = CardData {
            number_of_customers: 10,
            number_of_invoices: 15,
            total_paid_invoices: "$1,000.00".to_string(),
            total_pending_invoices: "$0.00".to_string(),
        };

        let json = serde_json::to_string(&cards).unwrap();
        assert!(json.contains("\"numberOfCustomers\":10"));
        assert!(json.contains("\"totalPendingInvoices\":\"$0.00\""));
    }
}
