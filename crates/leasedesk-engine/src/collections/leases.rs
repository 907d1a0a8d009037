use super::ColumnKey;
use crate::lookup::{UNKNOWN_LABEL, find_by_id, tenant_name};
use crate::view::{CollectionSpec, SortValue};
use leasedesk_types::{Error, Lease, RecordId, Tenant, Unit};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaseSortKey {
    Id,
    Tenant,
    Unit,
    Start,
    End,
    Rent,
}

impl ColumnKey for LeaseSortKey {
    const SCREEN: &'static str = "leases";
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Tenant,
        Self::Unit,
        Self::Start,
        Self::End,
        Self::Rent,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Tenant => "tenant",
            Self::Unit => "unit",
            Self::Start => "start",
            Self::End => "end",
            Self::Rent => "rent",
        }
    }
}

impl FromStr for LeaseSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_column(s)
    }
}

impl fmt::Display for LeaseSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lease list spec; borrows the reference collections so search can match
/// the resolved tenant name and unit label.
///
/// The tenant and unit columns sort by the raw foreign-key ids.
#[derive(Debug, Clone, Copy)]
pub struct LeaseSpec<'a> {
    pub tenants: &'a [Tenant],
    pub units: &'a [Unit],
}

impl<'a> LeaseSpec<'a> {
    pub fn new(tenants: &'a [Tenant], units: &'a [Unit]) -> Self {
        Self { tenants, units }
    }
}

impl CollectionSpec for LeaseSpec<'_> {
    type Record = Lease;
    type SortKey = LeaseSortKey;
    type Status = Infallible;

    fn search_fields<'r>(&'r self, record: &'r Lease) -> Vec<Cow<'r, str>> {
        let unit = find_by_id(self.units, record.unit_id)
            .map(|unit| Cow::Owned(unit.label()))
            .unwrap_or(Cow::Borrowed(UNKNOWN_LABEL));
        vec![Cow::Borrowed(tenant_name(self.tenants, record.tenant_id)), unit]
    }

    fn search_id(&self, record: &Lease) -> Option<RecordId> {
        Some(record.id)
    }

    fn sort_value<'r>(&'r self, record: &'r Lease, key: LeaseSortKey) -> SortValue<'r> {
        match key {
            LeaseSortKey::Id => SortValue::Id(record.id),
            LeaseSortKey::Tenant => SortValue::Id(record.tenant_id),
            LeaseSortKey::Unit => SortValue::Id(record.unit_id),
            LeaseSortKey::Start => SortValue::Date(record.start_date),
            LeaseSortKey::End => SortValue::Date(record.end_date),
            LeaseSortKey::Rent => SortValue::Amount(record.rent_amount),
        }
    }
}
