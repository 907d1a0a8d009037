//! Aggregates over loaded collections: payment totals and dashboard figures.

use crate::calendar::is_lease_active;
use chrono::NaiveDate;
use leasedesk_types::{Lease, Payment, PaymentStatus, Tenant, Unit, UnitStatus};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Number of payments the dashboard lists
pub const RECENT_PAYMENTS: usize = 5;

/// Sum of completed amounts over whatever set is passed in, usually the
/// filtered view rather than the raw collection.
pub fn completed_total<'a, I>(payments: I) -> Decimal
where
    I: IntoIterator<Item = &'a Payment>,
{
    payments
        .into_iter()
        .filter(|payment| payment.status == PaymentStatus::Completed)
        .map(|payment| payment.amount)
        .sum()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentSummary {
    pub count: usize,
    pub completed_count: usize,
    pub completed_amount: Decimal,
}

pub fn summarize_payments(payments: &[&Payment]) -> PaymentSummary {
    PaymentSummary {
        count: payments.len(),
        completed_count: payments
            .iter()
            .filter(|payment| payment.status == PaymentStatus::Completed)
            .count(),
        completed_amount: completed_total(payments.iter().copied()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_tenants: usize,
    pub total_units: usize,
    pub available_units: usize,
    pub occupied_units: usize,
    pub active_leases: usize,
    pub total_payments: usize,
    /// Occupied share of all units in percent, one decimal, halves rounded up;
    /// 0 when there are no units
    #[serde(with = "rust_decimal::serde::float")]
    pub occupancy_rate: Decimal,
    pub recent_payments: Vec<Payment>,
}

impl DashboardStats {
    pub fn compute(
        tenants: &[Tenant],
        units: &[Unit],
        leases: &[Lease],
        payments: &[Payment],
        today: NaiveDate,
    ) -> Self {
        let count_units = |status: UnitStatus| units.iter().filter(|u| u.status == status).count();
        let available_units = count_units(UnitStatus::Available);
        let occupied_units = count_units(UnitStatus::Occupied);

        let occupancy_rate = if units.is_empty() {
            Decimal::ZERO
        } else {
            (Decimal::from(occupied_units) * Decimal::ONE_HUNDRED / Decimal::from(units.len()))
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        };

        let active_leases = leases
            .iter()
            .filter(|lease| is_lease_active(lease.start_date, lease.end_date, today))
            .count();

        // newest first; same-day payments keep their arrival order
        let mut recent_payments = payments.to_vec();
        recent_payments.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
        recent_payments.truncate(RECENT_PAYMENTS);

        Self {
            total_tenants: tenants.len(),
            total_units: units.len(),
            available_units,
            occupied_units,
            active_leases,
            total_payments: payments.len(),
            occupancy_rate,
            recent_payments,
        }
    }

    /// Occupancy rounded to one decimal, e.g. "66.7"
    pub fn occupancy_display(&self) -> String {
        format!("{:.1}", self.occupancy_rate)
    }
}
