use chrono::NaiveDate;
use leasedesk_engine::LeaseActivity;
use leasedesk_types::{PaymentStatus, RecordId, UnitStatus};
use rust_decimal::Decimal;
use serde::Serialize;

use super::listing::ListMeta;

#[derive(Debug, Clone, Serialize)]
pub struct TenantRowViewModel {
    pub id: RecordId,
    pub name: String,
    pub contact_info: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TenantListViewModel {
    pub meta: ListMeta,
    pub tenants: Vec<TenantRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitRowViewModel {
    pub id: RecordId,
    pub unit_number: String,
    pub building: String,
    pub status: UnitStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitListViewModel {
    pub meta: ListMeta,
    pub units: Vec<UnitRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaseRowViewModel {
    pub id: RecordId,
    pub tenant_id: RecordId,
    /// "<name> (<contact>)" or "Unknown"
    pub tenant: String,
    pub unit_id: RecordId,
    /// "<number> - <building>" or "Unknown"
    pub unit: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub rent_amount: Decimal,
    pub activity: LeaseActivity,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaseListViewModel {
    pub meta: ListMeta,
    pub as_of: NaiveDate,
    pub leases: Vec<LeaseRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentRowViewModel {
    pub id: RecordId,
    pub tenant_id: RecordId,
    pub tenant: String,
    pub lease_id: RecordId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub status: PaymentStatus,
}

/// Totals over the filtered rows, not the whole collection
#[derive(Debug, Clone, Serialize)]
pub struct PaymentSummaryViewModel {
    pub count: usize,
    pub completed_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub completed_amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentListViewModel {
    pub meta: ListMeta,
    pub summary: PaymentSummaryViewModel,
    pub payments: Vec<PaymentRowViewModel>,
}
