//! Foreign-key resolution over loaded reference collections.
//!
//! Lookups are linear scans and never fail: a missing row, or a reference
//! collection that has not loaded yet, resolves to [`UNKNOWN_LABEL`].

use leasedesk_types::{Lease, Record, RecordId, Tenant, Unit, UnitStatus};

pub const UNKNOWN_LABEL: &str = "Unknown";

pub fn find_by_id<R: Record>(items: &[R], id: RecordId) -> Option<&R> {
    items.iter().find(|record| record.id() == id)
}

pub fn tenant_name(tenants: &[Tenant], id: RecordId) -> &str {
    find_by_id(tenants, id)
        .map(|tenant| tenant.name.as_str())
        .unwrap_or(UNKNOWN_LABEL)
}

/// "Ada Park (ada@example.com)"
pub fn tenant_label(tenants: &[Tenant], id: RecordId) -> String {
    find_by_id(tenants, id)
        .map(|tenant| format!("{} ({})", tenant.name, tenant.contact_info))
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

/// "101 - North Wing"
pub fn unit_label(units: &[Unit], id: RecordId) -> String {
    find_by_id(units, id)
        .map(Unit::label)
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

/// Units offered when picking a unit for a lease.
///
/// New leases may only take available units; while editing every unit is offered.
pub fn available_units(units: &[Unit], editing: bool) -> Vec<&Unit> {
    units
        .iter()
        .filter(|unit| editing || unit.status == UnitStatus::Available)
        .collect()
}

/// Leases a payment for `tenant_id` may be recorded against
pub fn leases_for_tenant(leases: &[Lease], tenant_id: RecordId) -> Vec<&Lease> {
    leases
        .iter()
        .filter(|lease| lease.tenant_id == tenant_id)
        .collect()
}
