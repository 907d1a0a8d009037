use super::record::{Record, RecordId};
use crate::error::Error;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Completed,
        PaymentStatus::Pending,
        PaymentStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownStatus {
                kind: "payment",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "paymentId")]
    pub id: RecordId,
    pub tenant_id: RecordId,
    pub lease_id: RecordId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    pub tenant_id: RecordId,
    pub lease_id: RecordId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub status: PaymentStatus,
}

impl Record for Payment {
    type Draft = PaymentDraft;

    const COLLECTION: &'static str = "payments";
    const NOUN: &'static str = "Payment";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_default_is_completed() {
        assert_eq!(PaymentStatus::default(), PaymentStatus::Completed);
    }

    #[test]
    fn test_payment_accepts_integer_amount() {
        let json = r#"{
            "paymentId": 12,
            "tenantId": 1,
            "leaseId": 4,
            "amount": 100,
            "paymentDate": "2024-03-01",
            "status": "pending"
        }"#;
        let payment: Payment = serde_json::from_str(json).unwrap();

        assert_eq!(payment.amount, Decimal::from(100));
        assert_eq!(payment.status, PaymentStatus::Pending);
    }

    #[test]
    fn test_unknown_status_error_message() {
        let err = "refunded".parse::<PaymentStatus>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown payment status: 'refunded'");
    }
}
