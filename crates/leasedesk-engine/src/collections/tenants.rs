use super::ColumnKey;
use crate::view::{CollectionSpec, SortValue};
use leasedesk_types::{Error, Tenant};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantSortKey {
    Id,
    Name,
    Contact,
}

impl ColumnKey for TenantSortKey {
    const SCREEN: &'static str = "tenants";
    const ALL: &'static [Self] = &[Self::Id, Self::Name, Self::Contact];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Contact => "contact",
        }
    }
}

impl FromStr for TenantSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_column(s)
    }
}

impl fmt::Display for TenantSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tenants search by name and contact; ids are not searched.
#[derive(Debug, Clone, Copy, Default)]
pub struct TenantSpec;

impl CollectionSpec for TenantSpec {
    type Record = Tenant;
    type SortKey = TenantSortKey;
    type Status = Infallible;

    fn search_fields<'r>(&'r self, record: &'r Tenant) -> Vec<Cow<'r, str>> {
        vec![
            Cow::Borrowed(record.name.as_str()),
            Cow::Borrowed(record.contact_info.as_str()),
        ]
    }

    fn sort_value<'r>(&'r self, record: &'r Tenant, key: TenantSortKey) -> SortValue<'r> {
        match key {
            TenantSortKey::Id => SortValue::Id(record.id),
            TenantSortKey::Name => SortValue::Text(Cow::Borrowed(record.name.as_str())),
            TenantSortKey::Contact => SortValue::Text(Cow::Borrowed(record.contact_info.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{SortSpec, ViewQuery, apply_view};

    fn tenant(id: i64, name: &str, contact: &str) -> Tenant {
        Tenant {
            id,
            name: name.to_string(),
            contact_info: contact.to_string(),
        }
    }

    #[test]
    fn test_tenant_search_covers_name_and_contact_only() {
        let tenants = vec![
            tenant(12, "Ada Park", "ada@example.com"),
            tenant(3, "Bo Chen", "555-123-4567"),
        ];

        let by_contact = apply_view(&TenantSpec, &tenants, &ViewQuery::new().search("555"));
        assert_eq!(by_contact.len(), 1);
        assert_eq!(by_contact[0].id, 3);

        let by_id = apply_view(&TenantSpec, &tenants, &ViewQuery::new().search("12"));
        assert!(by_id.is_empty());
    }

    #[test]
    fn test_tenant_sort_by_name_descending() {
        let tenants = vec![
            tenant(1, "Ada Park", "a@x.io"),
            tenant(2, "Cy Diaz", "c@x.io"),
            tenant(3, "Bo Chen", "b@x.io"),
        ];
        let query = ViewQuery::new().sort(Some(SortSpec::descending(TenantSortKey::Name)));
        let names: Vec<&str> = apply_view(&TenantSpec, &tenants, &query)
            .iter()
            .map(|t| t.name.as_str())
            .collect();

        assert_eq!(names, vec!["Cy Diaz", "Bo Chen", "Ada Park"]);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("Contact".parse::<TenantSortKey>(), Ok(TenantSortKey::Contact));
        let err = "rent".parse::<TenantSortKey>().unwrap_err();
        assert_eq!(err.to_string(), "Cannot sort tenants by 'rent'");
        assert_eq!(TenantSortKey::names(), "id, name, contact");
    }
}
