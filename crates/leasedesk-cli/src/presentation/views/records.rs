use std::fmt;

use leasedesk_engine::{LeaseActivity, SortDirection};

use crate::presentation::formatters::{
    Tone, format_currency, format_date, paint, status_tone, truncate,
};
use crate::presentation::view_models::{
    CreateView, EmptyState, LeaseListViewModel, ListMeta, PaymentListViewModel,
    TenantListViewModel, UnitListViewModel, ViewMode,
};

const NAME_WIDTH: usize = 24;
const LABEL_WIDTH: usize = 28;

/// Writes the empty-state line and reports whether the list was empty
fn write_empty(f: &mut fmt::Formatter<'_>, meta: &ListMeta) -> Result<bool, fmt::Error> {
    match meta.empty {
        Some(EmptyState::NoRecords) => {
            writeln!(f, "No {} yet", meta.entity)?;
            Ok(true)
        }
        Some(EmptyState::NoResults) => {
            writeln!(f, "No results found")?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn write_footer(f: &mut fmt::Formatter<'_>, meta: &ListMeta, mode: ViewMode) -> fmt::Result {
    if !matches!(mode, ViewMode::Standard | ViewMode::Verbose) {
        return Ok(());
    }

    write!(f, "\nShowing {} of {} {}", meta.shown, meta.total, meta.entity)?;
    if let Some(search) = &meta.search {
        write!(f, " matching \"{}\"", search)?;
    }
    if let Some(status) = &meta.status {
        write!(f, " with status {}", status)?;
    }
    if let Some(sort) = &meta.sort {
        let direction = match sort.direction {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        };
        write!(f, ", sorted by {} {}", sort.key, direction)?;
    }
    writeln!(f)
}

fn label(text: &str, mode: ViewMode, width: usize) -> String {
    if mode == ViewMode::Verbose {
        text.to_string()
    } else {
        truncate(text, width)
    }
}

fn activity_tone(activity: &LeaseActivity) -> Tone {
    match activity {
        LeaseActivity::Active => Tone::Success,
        LeaseActivity::ExpiringSoon { .. } => Tone::Warning,
        LeaseActivity::Expired => Tone::Danger,
        LeaseActivity::Upcoming => Tone::Secondary,
    }
}

// --------------------------------------------------------
// Tenants
// --------------------------------------------------------

impl CreateView for TenantListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(TenantListView { data: self, mode })
    }
}

struct TenantListView<'a> {
    data: &'a TenantListViewModel,
    mode: ViewMode,
}

impl fmt::Display for TenantListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if write_empty(f, &self.data.meta)? {
            return Ok(());
        }

        if self.mode == ViewMode::Minimal {
            for tenant in &self.data.tenants {
                writeln!(f, "{}", tenant.id)?;
            }
            return Ok(());
        }

        writeln!(
            f,
            "{:<5} {:<width$} {}",
            "ID",
            "NAME",
            "CONTACT",
            width = NAME_WIDTH
        )?;
        for tenant in &self.data.tenants {
            writeln!(
                f,
                "{:<5} {:<width$} {}",
                tenant.id,
                label(&tenant.name, self.mode, NAME_WIDTH),
                tenant.contact_info,
                width = NAME_WIDTH
            )?;
        }

        write_footer(f, &self.data.meta, self.mode)
    }
}

// --------------------------------------------------------
// Units
// --------------------------------------------------------

impl CreateView for UnitListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(UnitListView { data: self, mode })
    }
}

struct UnitListView<'a> {
    data: &'a UnitListViewModel,
    mode: ViewMode,
}

impl fmt::Display for UnitListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if write_empty(f, &self.data.meta)? {
            return Ok(());
        }

        if self.mode == ViewMode::Minimal {
            for unit in &self.data.units {
                writeln!(f, "{}", unit.id)?;
            }
            return Ok(());
        }

        writeln!(f, "{:<5} {:<8} {:<20} STATUS", "ID", "NUMBER", "BUILDING")?;
        for unit in &self.data.units {
            writeln!(
                f,
                "{:<5} {:<8} {:<20} {}",
                unit.id,
                unit.unit_number,
                label(&unit.building, self.mode, 20),
                paint(unit.status.as_str(), status_tone(unit.status.as_str()))
            )?;
        }

        write_footer(f, &self.data.meta, self.mode)
    }
}

// --------------------------------------------------------
// Leases
// --------------------------------------------------------

impl CreateView for LeaseListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(LeaseListView { data: self, mode })
    }
}

struct LeaseListView<'a> {
    data: &'a LeaseListViewModel,
    mode: ViewMode,
}

impl fmt::Display for LeaseListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if write_empty(f, &self.data.meta)? {
            return Ok(());
        }

        if self.mode == ViewMode::Minimal {
            for lease in &self.data.leases {
                writeln!(f, "{}", lease.id)?;
            }
            return Ok(());
        }

        writeln!(
            f,
            "{:<5} {:<lw$} {:<20} {:<13} {:<13} {:>11}  STATUS",
            "ID",
            "TENANT",
            "UNIT",
            "START",
            "END",
            "RENT",
            lw = LABEL_WIDTH
        )?;
        for lease in &self.data.leases {
            let (tenant, unit) = if self.mode == ViewMode::Verbose {
                (
                    format!("{} [#{}]", lease.tenant, lease.tenant_id),
                    format!("{} [#{}]", lease.unit, lease.unit_id),
                )
            } else {
                (
                    truncate(&lease.tenant, LABEL_WIDTH),
                    truncate(&lease.unit, 20),
                )
            };
            writeln!(
                f,
                "{:<5} {:<lw$} {:<20} {:<13} {:<13} {:>11}  {}",
                lease.id,
                tenant,
                unit,
                format_date(lease.start_date),
                format_date(lease.end_date),
                format_currency(lease.rent_amount),
                paint(&lease.activity.to_string(), activity_tone(&lease.activity)),
                lw = LABEL_WIDTH
            )?;
        }

        write_footer(f, &self.data.meta, self.mode)?;
        if self.mode == ViewMode::Verbose {
            writeln!(f, "Activity as of {}", format_date(self.data.as_of))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Payments
// --------------------------------------------------------

impl CreateView for PaymentListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(PaymentListView { data: self, mode })
    }
}

struct PaymentListView<'a> {
    data: &'a PaymentListViewModel,
    mode: ViewMode,
}

impl fmt::Display for PaymentListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if write_empty(f, &self.data.meta)? {
            return Ok(());
        }

        if self.mode == ViewMode::Minimal {
            for payment in &self.data.payments {
                writeln!(f, "{}", payment.id)?;
            }
            return Ok(());
        }

        writeln!(
            f,
            "{:<5} {:<nw$} {:<6} {:>11}  {:<13} STATUS",
            "ID",
            "TENANT",
            "LEASE",
            "AMOUNT",
            "DATE",
            nw = NAME_WIDTH
        )?;
        for payment in &self.data.payments {
            let tenant = if self.mode == ViewMode::Verbose {
                format!("{} [#{}]", payment.tenant, payment.tenant_id)
            } else {
                truncate(&payment.tenant, NAME_WIDTH)
            };
            writeln!(
                f,
                "{:<5} {:<nw$} {:<6} {:>11}  {:<13} {}",
                payment.id,
                tenant,
                format!("#{}", payment.lease_id),
                format_currency(payment.amount),
                format_date(payment.payment_date),
                paint(payment.status.as_str(), status_tone(payment.status.as_str())),
                nw = NAME_WIDTH
            )?;
        }

        let summary = &self.data.summary;
        writeln!(
            f,
            "\n{} payments, {} completed: {}",
            summary.count,
            summary.completed_count,
            format_currency(summary.completed_amount)
        )?;

        write_footer(f, &self.data.meta, self.mode)
    }
}
