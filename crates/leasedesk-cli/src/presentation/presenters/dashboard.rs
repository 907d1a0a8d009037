use chrono::NaiveDate;
use leasedesk_engine::DashboardStats;

use crate::presentation::view_models::{
    CommandResultViewModel, DashboardViewModel, Guidance, RecentPaymentViewModel,
};

pub fn present_dashboard(
    stats: DashboardStats,
    as_of: NaiveDate,
) -> CommandResultViewModel<DashboardViewModel> {
    let recent_payments = stats
        .recent_payments
        .iter()
        .map(|payment| RecentPaymentViewModel {
            id: payment.id,
            tenant_id: payment.tenant_id,
            amount: payment.amount,
            payment_date: payment.payment_date,
            status: payment.status,
        })
        .collect();

    let empty = stats.total_units == 0;
    let result = CommandResultViewModel::new(DashboardViewModel {
        as_of,
        total_tenants: stats.total_tenants,
        total_units: stats.total_units,
        available_units: stats.available_units,
        occupied_units: stats.occupied_units,
        active_leases: stats.active_leases,
        total_payments: stats.total_payments,
        occupancy_rate: stats.occupancy_rate,
        recent_payments,
    });

    if empty {
        result.with_suggestion(
            Guidance::new("Add units to start tracking occupancy")
                .with_command("leasedesk unit add --number <NUMBER> --building <BUILDING>"),
        )
    } else {
        result
    }
}
