//! Per-entity collection specs: searchable fields, status accessor and
//! sortable columns for each list screen.

mod leases;
mod payments;
mod tenants;
mod units;

pub use leases::{LeaseSortKey, LeaseSpec};
pub use payments::{PaymentSortKey, PaymentSpec};
pub use tenants::{TenantSortKey, TenantSpec};
pub use units::{UnitSortKey, UnitSpec};

use leasedesk_types::Error;

/// A sortable column of one screen
pub trait ColumnKey: Copy + PartialEq + Sized + 'static {
    /// Screen name used in error messages
    const SCREEN: &'static str;
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse_column(s: &str) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownSortKey {
                screen: Self::SCREEN,
                value: s.to_string(),
            })
    }

    /// Comma-separated list of accepted column names
    fn names() -> String {
        Self::ALL
            .iter()
            .map(|key| key.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
