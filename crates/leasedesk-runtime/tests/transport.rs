use httpmock::prelude::*;
use leasedesk_engine::FormMode;
use leasedesk_runtime::{
    ApiClient, ApiConfig, Config, ConnectionState, Error, FailureKind, LeaseDesk, MemoryStore,
    MutationKind,
};
use leasedesk_types::{Record, TenantDraft, Unit};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.api.base_url = server.base_url();
    config
}

fn desk_for(server: &MockServer) -> LeaseDesk {
    LeaseDesk::with_store(
        std::env::temp_dir(),
        config_for(server),
        Arc::new(MemoryStore::new()),
    )
    .unwrap()
}

#[test]
fn test_list_decodes_backend_records() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/units");
        then.status(200).json_body(json!([
            {"unitId": 1, "unitNumber": "101", "building": "North Wing", "status": "occupied"},
            {"unitId": 2, "unitNumber": "102", "building": "North Wing", "status": "available"}
        ]));
    });

    let units = desk_for(&server).units().list().unwrap();

    mock.assert();
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].label(), "101 - North Wing");
}

#[test]
fn test_create_posts_draft_then_refetches() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/tenants")
            .json_body(json!({"name": "Ada Park", "contactInfo": "ada@example.com"}));
        then.status(201).json_body(
            json!({"tenantId": 9, "name": "Ada Park", "contactInfo": "ada@example.com"}),
        );
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/tenants");
        then.status(200).json_body(json!([
            {"tenantId": 9, "name": "Ada Park", "contactInfo": "ada@example.com"}
        ]));
    });

    let draft = TenantDraft {
        name: "Ada Park".to_string(),
        contact_info: "ada@example.com".to_string(),
    };
    let mutation = desk_for(&server)
        .tenants()
        .save(FormMode::Create, &draft)
        .unwrap();

    create.assert();
    list.assert();
    assert_eq!(mutation.kind, MutationKind::Created);
    assert_eq!(mutation.items.len(), 1);
    assert_eq!(mutation.message(), "Tenant created successfully");
}

#[test]
fn test_update_and_delete_hit_record_paths() {
    let server = MockServer::start();
    let update = server.mock(|when, then| {
        when.method(PUT).path("/tenants/3");
        then.status(200)
            .json_body(json!({"tenantId": 3, "name": "Bo", "contactInfo": "bo@example.com"}));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/tenants/3");
        then.status(200).body("Tenant deleted");
    });
    server.mock(|when, then| {
        when.method(GET).path("/tenants");
        then.status(200).json_body(json!([]));
    });

    let desk = desk_for(&server);
    let draft = TenantDraft {
        name: "Bo".to_string(),
        contact_info: "bo@example.com".to_string(),
    };
    let updated = desk.tenants().save(FormMode::Edit(3), &draft).unwrap();
    let deleted = desk.tenants().delete(3).unwrap();

    update.assert();
    delete.assert();
    assert_eq!(updated.message(), "Tenant updated successfully");
    assert_eq!(deleted.kind, MutationKind::Deleted);
    assert!(deleted.items.is_empty());
}

#[test]
fn test_server_error_message_is_surfaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/units/4");
        then.status(409)
            .json_body(json!({"message": "Unit has an active lease"}));
    });

    let err = desk_for(&server).units().delete(4).unwrap_err();
    assert_eq!(err.user_message(), "Unit has an active lease");
}

#[test]
fn test_server_error_without_body_reports_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/leases");
        then.status(500);
    });

    let err = desk_for(&server).leases().list().unwrap_err();
    assert!(matches!(err, Error::Server { status: 500, message: None }));
    assert_eq!(err.user_message(), "Server error: 500");
}

#[test]
fn test_get_missing_record_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/tenants");
        then.status(200).json_body(json!([]));
    });

    let err = desk_for(&server).tenants().get(42).unwrap_err();
    assert_eq!(err.to_string(), "Tenant #42 not found");
}

#[test]
fn test_slow_backend_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/payments");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(json!([]));
    });

    let mut api = ApiConfig::default();
    api.base_url = server.base_url();
    api.timeout_ms = 50;
    let client = ApiClient::new(&api).unwrap();

    let err = client.get::<Vec<serde_json::Value>>("/payments").unwrap_err();
    assert!(matches!(err, Error::Timeout));
    assert_eq!(
        err.user_message(),
        "Request timed out. Backend server may be starting up or under heavy load."
    );
}

#[test]
fn test_closed_port_is_unreachable() {
    let mut api = ApiConfig::default();
    api.base_url = "http://127.0.0.1:1/api".to_string();
    let client = ApiClient::new(&api).unwrap();

    let err = client.list::<Unit>().unwrap_err();
    assert!(matches!(err, Error::Unreachable { .. }), "got {err:?}");
}

#[test]
fn test_monitor_reports_connected_after_health_ok() {
    let server = MockServer::start();
    let health = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200).body("OK");
    });

    let desk = desk_for(&server);
    let mut monitor = desk.monitor();
    let state = monitor.run_until_connected(Some(3), |_| {}, |_| {});

    health.assert_calls(1);
    assert_eq!(state, ConnectionState::Connected);
}

#[test]
fn test_monitor_classifies_unhealthy_backend_as_other() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(503);
    });

    let desk = desk_for(&server);
    let mut monitor = desk.monitor();
    let state = monitor.run_until_connected(Some(2), |_| {}, |_| {});

    match state {
        ConnectionState::Disconnected { kind, attempts, message } => {
            assert_eq!(kind, FailureKind::Other);
            assert_eq!(attempts, 2);
            assert_eq!(message, "Backend connection failed. Retrying...");
        }
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn test_health_probe_uses_its_own_shorter_timeout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200).delay(Duration::from_millis(500)).body("OK");
    });
    server.mock(|when, then| {
        when.method(GET).path("/units");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(json!([]));
    });

    let mut config = config_for(&server);
    config.api.timeout_ms = 5000;
    config.api.health_timeout_ms = 100;
    let desk = LeaseDesk::with_store(std::env::temp_dir(), config, Arc::new(MemoryStore::new()))
        .unwrap();

    // the same delay is fine for ordinary requests
    assert!(desk.units().list().unwrap().is_empty());

    let mut monitor = desk.monitor();
    match monitor.check() {
        ConnectionState::Disconnected { kind, attempts, message } => {
            assert_eq!(*kind, FailureKind::Timeout);
            assert_eq!(*attempts, 1);
            assert_eq!(message, "Backend is slow to respond. It may still be starting up.");
        }
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn test_dashboard_combines_collections() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/tenants");
        then.status(200).json_body(json!([
            {"tenantId": 1, "name": "Ada", "contactInfo": "ada@example.com"}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/units");
        then.status(200).json_body(json!([
            {"unitId": 1, "unitNumber": "101", "building": "A", "status": "occupied"},
            {"unitId": 2, "unitNumber": "102", "building": "A", "status": "available"}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/leases");
        then.status(200).json_body(json!([
            {"leaseId": 1, "tenantId": 1, "unitId": 1, "startDate": "2024-01-01",
             "endDate": "2024-12-31", "rentAmount": 1200.0}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/payments");
        then.status(200).json_body(json!([
            {"paymentId": 1, "tenantId": 1, "leaseId": 1, "amount": 1200.0,
             "paymentDate": "2024-02-01", "status": "completed"}
        ]));
    });

    let stats = desk_for(&server)
        .dashboard("2024-06-01".parse().unwrap())
        .unwrap();

    assert_eq!(stats.total_tenants, 1);
    assert_eq!(stats.active_leases, 1);
    assert_eq!(stats.occupancy_display(), "50.0");
    assert_eq!(stats.recent_payments[0].id(), 1);
}

#[test]
fn test_login_persists_identity_in_store() {
    let server = MockServer::start();
    let store = Arc::new(MemoryStore::new());
    let mut desk =
        LeaseDesk::with_store(std::env::temp_dir(), config_for(&server), store.clone()).unwrap();

    desk.login("property_manager", "SecurePass2025!@#").unwrap();

    let reopened =
        LeaseDesk::with_store(std::env::temp_dir(), config_for(&server), store).unwrap();
    assert_eq!(
        reopened.identity().map(|i| i.username.as_str()),
        Some("property_manager")
    );
}
