use super::record::{Record, RecordId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    #[serde(rename = "leaseId")]
    pub id: RecordId,
    pub tenant_id: RecordId,
    pub unit_id: RecordId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Monthly rent
    #[serde(with = "rust_decimal::serde::float")]
    pub rent_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseDraft {
    pub tenant_id: RecordId,
    pub unit_id: RecordId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub rent_amount: Decimal,
}

impl Record for Lease {
    type Draft = LeaseDraft;

    const COLLECTION: &'static str = "leases";
    const NOUN: &'static str = "Lease";

    fn id(&self) -> RecordId {
        self.id
    }
}
