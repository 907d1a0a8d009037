use super::ColumnKey;
use crate::view::{CollectionSpec, SortValue};
use leasedesk_types::{Error, Unit, UnitStatus};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSortKey {
    Id,
    Number,
    Building,
    Status,
}

impl ColumnKey for UnitSortKey {
    const SCREEN: &'static str = "units";
    const ALL: &'static [Self] = &[Self::Id, Self::Number, Self::Building, Self::Status];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Number => "number",
            Self::Building => "building",
            Self::Status => "status",
        }
    }
}

impl FromStr for UnitSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_column(s)
    }
}

impl fmt::Display for UnitSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnitSpec;

impl CollectionSpec for UnitSpec {
    type Record = Unit;
    type SortKey = UnitSortKey;
    type Status = UnitStatus;

    fn search_fields<'r>(&'r self, record: &'r Unit) -> Vec<Cow<'r, str>> {
        vec![
            Cow::Borrowed(record.unit_number.as_str()),
            Cow::Borrowed(record.building.as_str()),
        ]
    }

    fn status(&self, record: &Unit) -> Option<UnitStatus> {
        Some(record.status)
    }

    fn sort_value<'r>(&'r self, record: &'r Unit, key: UnitSortKey) -> SortValue<'r> {
        match key {
            UnitSortKey::Id => SortValue::Id(record.id),
            UnitSortKey::Number => SortValue::Text(Cow::Borrowed(record.unit_number.as_str())),
            UnitSortKey::Building => SortValue::Text(Cow::Borrowed(record.building.as_str())),
            UnitSortKey::Status => SortValue::Text(Cow::Borrowed(record.status.as_str())),
        }
    }
}
