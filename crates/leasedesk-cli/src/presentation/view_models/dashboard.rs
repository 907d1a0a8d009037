use chrono::NaiveDate;
use leasedesk_types::{PaymentStatus, RecordId};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RecentPaymentViewModel {
    pub id: RecordId,
    pub tenant_id: RecordId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    pub as_of: NaiveDate,
    pub total_tenants: usize,
    pub total_units: usize,
    pub available_units: usize,
    pub occupied_units: usize,
    pub active_leases: usize,
    pub total_payments: usize,
    /// Percent, one decimal
    #[serde(with = "rust_decimal::serde::float")]
    pub occupancy_rate: Decimal,
    pub recent_payments: Vec<RecentPaymentViewModel>,
}
