//! Sample backend data, evaluated against [`TODAY`].
//!
//! | lease | tenant | unit | term | activity on TODAY |
//! |---|---|---|---|---|
//! | 1 | Ada Park | 101 | 2024-01-01..2024-12-31 | active |
//! | 2 | Bo Chen | 102 | 2023-07-01..2024-06-20 | expiring soon (19 days) |
//! | 3 | Cy Diaz | 201 | 2023-01-01..2023-12-31 | expired |

use serde_json::{Value, json};

/// Reference day passed to the CLI as `--today`
pub const TODAY: &str = "2024-06-01";

pub const USERNAME: &str = "property_manager";
pub const PASSWORD: &str = "SecurePass2025!@#";

pub fn tenants() -> Value {
    json!([
        {"tenantId": 1, "name": "Ada Park", "contactInfo": "ada@example.com"},
        {"tenantId": 2, "name": "Bo Chen", "contactInfo": "555-123-4567"},
        {"tenantId": 3, "name": "Cy Diaz", "contactInfo": "cy@example.com"}
    ])
}

pub fn units() -> Value {
    json!([
        {"unitId": 1, "unitNumber": "101", "building": "North Wing", "status": "occupied"},
        {"unitId": 2, "unitNumber": "102", "building": "North Wing", "status": "occupied"},
        {"unitId": 3, "unitNumber": "201", "building": "South Wing", "status": "available"},
        {"unitId": 4, "unitNumber": "202", "building": "South Wing", "status": "maintenance"}
    ])
}

pub fn leases() -> Value {
    json!([
        {"leaseId": 1, "tenantId": 1, "unitId": 1, "startDate": "2024-01-01",
         "endDate": "2024-12-31", "rentAmount": 1450.50},
        {"leaseId": 2, "tenantId": 2, "unitId": 2, "startDate": "2023-07-01",
         "endDate": "2024-06-20", "rentAmount": 1200},
        {"leaseId": 3, "tenantId": 3, "unitId": 3, "startDate": "2023-01-01",
         "endDate": "2023-12-31", "rentAmount": 1100}
    ])
}

pub fn payments() -> Value {
    json!([
        {"paymentId": 1, "tenantId": 1, "leaseId": 1, "amount": 1450.50,
         "paymentDate": "2024-05-01", "status": "completed"},
        {"paymentId": 2, "tenantId": 2, "leaseId": 2, "amount": 1200,
         "paymentDate": "2024-05-03", "status": "completed"},
        {"paymentId": 3, "tenantId": 1, "leaseId": 1, "amount": 1450.50,
         "paymentDate": "2024-06-01", "status": "pending"},
        {"paymentId": 4, "tenantId": 3, "leaseId": 3, "amount": 1100,
         "paymentDate": "2023-12-01", "status": "failed"}
    ])
}
