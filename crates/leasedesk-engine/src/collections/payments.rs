use super::ColumnKey;
use crate::lookup::tenant_name;
use crate::view::{CollectionSpec, SortValue};
use leasedesk_types::{Error, Payment, PaymentStatus, RecordId, Tenant};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentSortKey {
    Id,
    Tenant,
    Lease,
    Amount,
    Date,
    Status,
}

impl ColumnKey for PaymentSortKey {
    const SCREEN: &'static str = "payments";
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Tenant,
        Self::Lease,
        Self::Amount,
        Self::Date,
        Self::Status,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Tenant => "tenant",
            Self::Lease => "lease",
            Self::Amount => "amount",
            Self::Date => "date",
            Self::Status => "status",
        }
    }
}

impl FromStr for PaymentSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_column(s)
    }
}

impl fmt::Display for PaymentSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PaymentSpec<'a> {
    pub tenants: &'a [Tenant],
}

impl<'a> PaymentSpec<'a> {
    pub fn new(tenants: &'a [Tenant]) -> Self {
        Self { tenants }
    }
}

impl CollectionSpec for PaymentSpec<'_> {
    type Record = Payment;
    type SortKey = PaymentSortKey;
    type Status = PaymentStatus;

    fn search_fields<'r>(&'r self, record: &'r Payment) -> Vec<Cow<'r, str>> {
        vec![Cow::Borrowed(tenant_name(self.tenants, record.tenant_id))]
    }

    fn search_id(&self, record: &Payment) -> Option<RecordId> {
        Some(record.id)
    }

    fn status(&self, record: &Payment) -> Option<PaymentStatus> {
        Some(record.status)
    }

    fn sort_value<'r>(&'r self, record: &'r Payment, key: PaymentSortKey) -> SortValue<'r> {
        match key {
            PaymentSortKey::Id => SortValue::Id(record.id),
            PaymentSortKey::Tenant => SortValue::Id(record.tenant_id),
            PaymentSortKey::Lease => SortValue::Id(record.lease_id),
            PaymentSortKey::Amount => SortValue::Amount(record.amount),
            PaymentSortKey::Date => SortValue::Date(record.payment_date),
            PaymentSortKey::Status => SortValue::Text(Cow::Borrowed(record.status.as_str())),
        }
    }
}
