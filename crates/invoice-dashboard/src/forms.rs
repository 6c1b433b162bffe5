//! Form parsing and validation for invoice and login submissions.
//!
//! Browsers post every field as a string, so a submission is first read into
//! a raw struct of optional strings, coerced into typed input, and then run
//! through `validator`. Failures are reported per form field, keyed by the
//! names the form uses (`customerId`, `amount`, `status`).

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::db::models::InvoiceStatus;

pub const CUSTOMER_MESSAGE: &str = "Please select a customer.";
pub const AMOUNT_MESSAGE: &str = "Please enter an amount greater than $0.";
pub const AMOUNT_TOO_LARGE_MESSAGE: &str = "Amount is too large.";
pub const STATUS_MESSAGE: &str = "Please select an invoice status.";

pub const CREATE_FAILED_MESSAGE: &str = "Missing Fields. Failed to Create Invoice.";
pub const UPDATE_FAILED_MESSAGE: &str = "Missing Fields. Failed to Update Invoice.";

/// Field name -> messages, in the shape the invoice form renders.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// State returned to the form after a rejected submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: FieldErrors,

    #[serde(default)]
    pub message: Option<String>,
}

impl FormState {
    pub fn new(errors: FieldErrors, message: &str) -> Self {
        Self {
            errors,
            message: Some(message.to_string()),
        }
    }

    pub fn field(&self, name: &str) -> Option<&[String]> {
        self.errors.get(name).map(Vec::as_slice)
    }
}

/// Invoice form exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInvoiceForm {
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

/// Invoice form after string coercion, ready for validation.
#[derive(Debug, Clone, Validate)]
pub struct InvoiceInput {
    #[validate(custom(function = "validate_customer_id"))]
    pub customer_id: String,

    #[validate(custom(function = "validate_amount"))]
    pub amount: f64,

    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

/// A validated invoice submission.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSubmission {
    pub customer_id: Uuid,
    pub amount_in_cents: i32,
    pub status: InvoiceStatus,
}

impl From<RawInvoiceForm> for InvoiceInput {
    fn from(raw: RawInvoiceForm) -> Self {
        Self {
            customer_id: raw.customer_id.unwrap_or_default().trim().to_string(),
            amount: coerce_number(raw.amount.as_deref()),
            status: raw.status.unwrap_or_default(),
        }
    }
}

impl RawInvoiceForm {
    /// Validate the submission. On failure the returned state carries the
    /// per-field errors and `failure_message`.
    pub fn validate_with(self, failure_message: &str) -> Result<InvoiceSubmission, FormState> {
        let input = InvoiceInput::from(self);

        if let Err(errors) = input.validate() {
            return Err(FormState::new(field_errors(&errors), failure_message));
        }

        let customer_id = Uuid::parse_str(&input.customer_id).map_err(|_| {
            FormState::new(single_error("customerId", CUSTOMER_MESSAGE), failure_message)
        })?;
        let status = InvoiceStatus::parse(&input.status).ok_or_else(|| {
            FormState::new(single_error("status", STATUS_MESSAGE), failure_message)
        })?;

        Ok(InvoiceSubmission {
            customer_id,
            amount_in_cents: dollars_to_cents(input.amount).ok_or_else(|| {
                FormState::new(
                    single_error("amount", AMOUNT_TOO_LARGE_MESSAGE),
                    failure_message,
                )
            })?,
            status,
        })
    }
}

/// Empty or missing input coerces to zero; unparsable input to NaN.
fn coerce_number(value: Option<&str>) -> f64 {
    match value.map(str::trim) {
        None | Some("") => 0.0,
        Some(s) => s.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Round dollars to whole cents, or `None` when the result does not fit the
/// `INT` column.
pub fn dollars_to_cents(amount: f64) -> Option<i32> {
    let cents = (amount * 100.0).round();
    if cents.is_finite() && cents >= f64::from(i32::MIN) && cents <= f64::from(i32::MAX) {
        Some(cents as i32)
    } else {
        None
    }
}

fn validate_customer_id(value: &str) -> Result<(), ValidationError> {
    if Uuid::parse_str(value).is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("customer").with_message(Cow::Borrowed(CUSTOMER_MESSAGE)))
    }
}

/// Amounts are stored as whole cents, so the check runs on the rounded value.
fn validate_amount(value: f64) -> Result<(), ValidationError> {
    if (value * 100.0).round() > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("amount").with_message(Cow::Borrowed(AMOUNT_MESSAGE)))
    }
}

fn validate_status(value: &str) -> Result<(), ValidationError> {
    if InvoiceStatus::parse(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("status").with_message(Cow::Borrowed(STATUS_MESSAGE)))
    }
}

fn form_field_name(field: &str) -> String {
    match field {
        "customer_id" => "customerId".to_string(),
        other => other.to_string(),
    }
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (form_field_name(&field), messages)
        })
        .collect()
}

fn single_error(field: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), vec![message.to_string()]);
    errors
}

/// Login form as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login credentials that passed validation.
#[derive(Debug, Clone, Validate)]
pub struct Credentials {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6))]
    pub password: String,
}

impl RawLoginForm {
    pub fn into_credentials(self) -> Option<Credentials> {
        let credentials = Credentials {
            email: self.email?.trim().to_string(),
            password: self.password?,
        };
        credentials.validate().ok().map(|_| credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOMER: &str = "3958dc9e-712f-4377-85e9-fec4b6a6442a";

    fn form(customer: Option<&str>, amount: Option<&str>, status: Option<&str>) -> RawInvoiceForm {
        RawInvoiceForm {
            customer_id: customer.map(String::from),
            amount: amount.map(String::from),
            status: status.map(String::from),
        }
    }

    #[test]
    fn test_valid_submission() {
        let submission = form(Some(CUSTOMER), Some("157.95"), Some("pending"))
            .validate_with(CREATE_FAILED_MESSAGE)
            .unwrap();

        assert_eq!(submission.customer_id.to_string(), CUSTOMER);
        assert_eq!(submission.amount_in_cents, 15795);
        assert_eq!(submission.status, InvoiceStatus::Pending);
    }

    #[test]
    fn test_empty_submission_reports_every_field() {
        let state = form(None, None, None)
            .validate_with(CREATE_FAILED_MESSAGE)
            .unwrap_err();

        assert_eq!(state.message.as_deref(), Some(CREATE_FAILED_MESSAGE));
        assert_eq!(state.field("customerId").unwrap(), [CUSTOMER_MESSAGE]);
        assert_eq!(state.field("amount").unwrap(), [AMOUNT_MESSAGE]);
        assert_eq!(state.field("status").unwrap(), [STATUS_MESSAGE]);
    }

    #[test]
    fn test_amount_must_be_positive() {
        for amount in ["0", "-12", "abc", "", "0.004", "NaN"] {
            let state = form(Some(CUSTOMER), Some(amount), Some("paid"))
                .validate_with(UPDATE_FAILED_MESSAGE)
                .unwrap_err();
            assert_eq!(state.field("amount").unwrap(), [AMOUNT_MESSAGE], "amount {amount:?}");
            assert!(state.field("customerId").is_none());
            assert!(state.field("status").is_none());
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        let state = form(Some(CUSTOMER), Some("10"), Some("overdue"))
            .validate_with(CREATE_FAILED_MESSAGE)
            .unwrap_err();
        assert_eq!(state.field("status").unwrap(), [STATUS_MESSAGE]);
    }

    #[test]
    fn test_non_uuid_customer_rejected() {
        let state = form(Some("'; DROP TABLE invoices; --"), Some("10"), Some("paid"))
            .validate_with(CREATE_FAILED_MESSAGE)
            .unwrap_err();
        assert_eq!(state.field("customerId").unwrap(), [CUSTOMER_MESSAGE]);
    }

    #[test]
    fn test_huge_amount_rejected() {
        let state = form(Some(CUSTOMER), Some("1e12"), Some("paid"))
            .validate_with(CREATE_FAILED_MESSAGE)
            .unwrap_err();
        assert_eq!(state.field("amount").unwrap(), [AMOUNT_TOO_LARGE_MESSAGE]);
    }

    #[test]
    fn test_dollars_to_cents_rounds() {
        assert_eq!(dollars_to_cents(0.1 + 0.2), Some(30));
        assert_eq!(dollars_to_cents(19.999), Some(2000));
        assert_eq!(dollars_to_cents(f64::NAN), None);
    }

    #[test]
    fn test_one_cent_is_accepted() {
        let submission = form(Some(CUSTOMER), Some("0.01"), Some("pending"))
            .validate_with(CREATE_FAILED_MESSAGE)
            .unwrap();
        assert_eq!(submission.amount_in_cents, 1);
    }

    #[test]
    fn test_form_state_serialization() {
        let state = FormState::new(single_error("amount", AMOUNT_MESSAGE), CREATE_FAILED_MESSAGE);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["errors"]["amount"][0], AMOUNT_MESSAGE);
        assert_eq!(json["message"], CREATE_FAILED_MESSAGE);
    }

    #[test]
    fn test_login_credentials() {
        let ok = RawLoginForm {
            email: Some("user@nextmail.com".to_string()),
            password: Some("123456".to_string()),
        };
        assert!(ok.into_credentials().is_some());

        let short = RawLoginForm {
            email: Some("user@nextmail.com".to_string()),
            password: Some("123".to_string()),
        };
        assert!(short.into_credentials().is_none());

        let bad_email = RawLoginForm {
            email: Some("not-an-email".to_string()),
            password: Some("123456".to_string()),
        };
        assert!(bad_email.into_credentials().is_none());

        assert!(RawLoginForm::default().into_credentials().is_none());
    }
}
