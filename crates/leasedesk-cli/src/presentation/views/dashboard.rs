use std::fmt;

use crate::presentation::formatters::{
    format_currency, format_date, format_percent, paint, status_tone,
};
use crate::presentation::view_models::{CreateView, DashboardViewModel, ViewMode};

impl CreateView for DashboardViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(DashboardView { data: self, mode })
    }
}

struct DashboardView<'a> {
    data: &'a DashboardViewModel,
    mode: ViewMode,
}

impl DashboardView<'_> {
    fn render_minimal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.data;
        writeln!(f, "tenants={}", d.total_tenants)?;
        writeln!(f, "units={}", d.total_units)?;
        writeln!(f, "available_units={}", d.available_units)?;
        writeln!(f, "active_leases={}", d.active_leases)?;
        writeln!(f, "payments={}", d.total_payments)?;
        writeln!(f, "occupancy={}", format_percent(d.occupancy_rate))
    }

    fn render_recent(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nRecent Payments")?;
        if self.data.recent_payments.is_empty() {
            return writeln!(f, "No payments recorded yet");
        }

        writeln!(
            f,
            "{:<5} {:<7} {:>11}  {:<13} STATUS",
            "ID", "TENANT", "AMOUNT", "DATE"
        )?;
        for payment in &self.data.recent_payments {
            writeln!(
                f,
                "{:<5} {:<7} {:>11}  {:<13} {}",
                payment.id,
                format!("#{}", payment.tenant_id),
                format_currency(payment.amount),
                format_date(payment.payment_date),
                paint(payment.status.as_str(), status_tone(payment.status.as_str()))
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return self.render_minimal(f);
        }

        let d = self.data;
        writeln!(f, "Dashboard as of {}", format_date(d.as_of))?;
        writeln!(f)?;
        writeln!(f, "{:<16} {}", "Tenants", d.total_tenants)?;
        writeln!(
            f,
            "{:<16} {} ({} available, {} occupied)",
            "Units", d.total_units, d.available_units, d.occupied_units
        )?;
        writeln!(f, "{:<16} {}", "Active leases", d.active_leases)?;
        writeln!(f, "{:<16} {}", "Payments", d.total_payments)?;
        writeln!(f, "{:<16} {}", "Occupancy rate", format_percent(d.occupancy_rate))?;

        self.render_recent(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::RecentPaymentViewModel;
    use leasedesk_types::PaymentStatus;
    use rust_decimal::Decimal;

    fn dashboard() -> DashboardViewModel {
        DashboardViewModel {
            as_of: "2024-06-01".parse().unwrap(),
            total_tenants: 3,
            total_units: 3,
            available_units: 1,
            occupied_units: 2,
            active_leases: 2,
            total_payments: 1,
            occupancy_rate: Decimal::new(667, 1),
            recent_payments: vec![RecentPaymentViewModel {
                id: 9,
                tenant_id: 2,
                amount: Decimal::new(120000, 2),
                payment_date: "2024-05-30".parse().unwrap(),
                status: PaymentStatus::Completed,
            }],
        }
    }

    #[test]
    fn test_dashboard_compact() {
        let vm = dashboard();
        insta::assert_snapshot!(vm.create_view(ViewMode::Compact).to_string(), @r"
        Dashboard as of Jun 1, 2024

        Tenants          3
        Units            3 (1 available, 2 occupied)
        Active leases    2
        Payments         1
        Occupancy rate   66.7%

        Recent Payments
        ID    TENANT       AMOUNT  DATE          STATUS
        9     #2        $1,200.00  May 30, 2024  completed
        ");
    }

    #[test]
    fn test_dashboard_minimal_is_key_value() {
        let vm = dashboard();
        let text = vm.create_view(ViewMode::Minimal).to_string();
        assert!(text.contains("tenants=3\n"));
        assert!(text.ends_with("occupancy=66.7%\n"));
    }

    #[test]
    fn test_dashboard_without_payments() {
        let mut vm = dashboard();
        vm.recent_payments.clear();
        let text = vm.create_view(ViewMode::Compact).to_string();
        assert!(text.ends_with("Recent Payments\nNo payments recorded yet\n"));
    }
}
