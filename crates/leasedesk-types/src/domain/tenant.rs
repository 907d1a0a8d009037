use super::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(rename = "tenantId")]
    pub id: RecordId,
    pub name: String,
    /// Email address or phone number
    pub contact_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantDraft {
    pub name: String,
    pub contact_info: String,
}

impl Record for Tenant {
    type Draft = TenantDraft;

    const COLLECTION: &'static str = "tenants";
    const NOUN: &'static str = "Tenant";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_wire_shape() {
        let json = r#"{"tenantId": 7, "name": "Ada Park", "contactInfo": "ada@example.com"}"#;
        let tenant: Tenant = serde_json::from_str(json).unwrap();

        assert_eq!(tenant.id, 7);
        assert_eq!(tenant.contact_info, "ada@example.com");

        let draft = TenantDraft {
            name: tenant.name.clone(),
            contact_info: tenant.contact_info.clone(),
        };
        let draft = serde_json::to_value(draft).unwrap();
        assert_eq!(
            draft,
            serde_json::json!({"name": "Ada Park", "contactInfo": "ada@example.com"})
        );
    }
}
