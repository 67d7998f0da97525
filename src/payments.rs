//! Payment wire model
//!
//! Types describing payment records as the gateway serves them.

use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle status of a payment held by the gateway.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Approved,
    Rejected,
}

impl PaymentStatus {
    /// Whether the payment still awaits an operator decision.
    pub fn is_pending(&self) -> bool {
        matches!(self, PaymentStatus::Pending)
    }
}

/// A single payment as returned by the gateway.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentRecord {
    /// Gateway-assigned identifier. Treated as opaque.
    pub id: String,
    /// Identifier of the order the payment belongs to.
    pub order_id: String,
    /// Payment amount. The gateway serializes this as either a JSON number
    /// or a numeric string depending on its storage backend.
    #[serde(deserialize_with = "amount_from_number_or_string")]
    pub amount: f64,
    /// Free-form payment method label (e.g. "pix", "credit_card").
    pub method: String,
    /// Current lifecycle status.
    pub status: PaymentStatus,
    /// Creation timestamp, if the gateway provides one.
    #[serde(default)]
    pub created_at: Option<String>,
}

fn amount_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(value) => Ok(value),
        Amount::Text(text) => text.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

/// Builds a record with placeholder identifiers for tests.
#[cfg(test)]
pub(crate) fn sample_record(id: &str, status: PaymentStatus, amount: f64) -> PaymentRecord {
    PaymentRecord {
        id: id.to_string(),
        order_id: format!("ord-{}", id),
        amount,
        method: "pix".to_string(),
        status,
        created_at: Some("2025-03-14T12:30:00Z".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_record_with_numeric_amount() {
        let json = r#"{
            "id": "pay_8f2cbb1a",
            "order_id": "ord_51",
            "amount": 249.9,
            "method": "credit_card",
            "status": "PENDING",
            "created_at": "2025-03-14T12:30:00Z"
        }"#;

        let record: PaymentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "pay_8f2cbb1a");
        assert_eq!(record.amount, 249.9);
        assert_eq!(record.status, PaymentStatus::Pending);
        assert_eq!(record.created_at.as_deref(), Some("2025-03-14T12:30:00Z"));
    }

    #[test]
    fn deserializes_record_with_string_amount() {
        let json = r#"{
            "id": "pay_1",
            "order_id": "ord_1",
            "amount": "1500.00",
            "method": "pix",
            "status": "APPROVED"
        }"#;

        let record: PaymentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.amount, 1500.0);
        assert_eq!(record.status, PaymentStatus::Approved);
        assert!(record.created_at.is_none());
    }

    #[test]
    fn status_serializes_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Rejected).unwrap(),
            "\"REJECTED\""
        );
    }

    #[test]
    fn status_displays_as_wire_value() {
        assert_eq!(PaymentStatus::Pending.to_string(), "PENDING");
        assert_eq!(PaymentStatus::Approved.to_string(), "APPROVED");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = r#"{
            "id": "pay_1",
            "order_id": "ord_1",
            "amount": 10.0,
            "method": "pix",
            "status": "REFUNDED"
        }"#;

        assert!(serde_json::from_str::<PaymentRecord>(json).is_err());
    }
}
