//! List & Filtering Tests
//!
//! Search, status filters, sorting and empty states of the four record
//! screens, against the fixture portfolio.

use anyhow::Result;
use leasedesk_testing::{TestWorld, assertions};
use httpmock::prelude::*;
use serde_json::json;

fn logged_in_world() -> Result<TestWorld> {
    let world = TestWorld::new().with_sample_data();
    world.login()?;
    Ok(world)
}

#[test]
fn test_tenant_list_json_keeps_backend_order() -> Result<()> {
    let world = logged_in_world()?;

    let result = world.run_json(&["tenant", "list"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_row_ids(&json, "tenants", &[1, 2, 3])?;
    assert_eq!(json["content"]["tenants"][1]["contact_info"], "555-123-4567");
    assert_eq!(json["content"]["meta"]["total"], 3);
    assertions::assert_empty_state(&json, None)?;
    Ok(())
}

#[test]
fn test_tenant_search_is_case_insensitive() -> Result<()> {
    let world = logged_in_world()?;

    let result = world.run_json(&["tenant", "list", "--search", "EXAMPLE.COM"])?;

    let json = result.json()?;
    assertions::assert_row_ids(&json, "tenants", &[1, 3])?;
    assert_eq!(json["content"]["meta"]["shown"], 2);
    assert_eq!(json["content"]["meta"]["search"], "EXAMPLE.COM");
    Ok(())
}

#[test]
fn test_search_without_match_reports_no_results() -> Result<()> {
    let world = logged_in_world()?;

    let text = world.run(&["tenant", "list", "-s", "zzz"])?;
    assert!(text.success());
    assert!(text.stdout().contains("No results found"));

    let json = world.run_json(&["tenant", "list", "-s", "zzz"])?.json()?;
    assertions::assert_empty_state(&json, Some("no_results"))?;
    Ok(())
}

#[test]
fn test_empty_collection_reports_no_records() -> Result<()> {
    let world = TestWorld::new()
        .with_collection("tenants", json!([]))
        .with_health(200);
    world.login()?;

    let result = world.run(&["tenant", "list"])?;

    assert!(result.success());
    assert!(result.stdout().contains("No tenants yet"));
    assert!(result.stdout().contains("leasedesk tenant add"));
    Ok(())
}

#[test]
fn test_unit_status_filter() -> Result<()> {
    let world = logged_in_world()?;

    let json = world
        .run_json(&["unit", "list", "--status", "available"])?
        .json()?;
    assertions::assert_row_ids(&json, "units", &[3])?;
    assert_eq!(json["content"]["meta"]["status"], "available");

    let all = world.run_json(&["unit", "list", "--status", "all"])?.json()?;
    assertions::assert_row_count(&all, "units", 4)?;
    Ok(())
}

#[test]
fn test_unknown_status_is_rejected() -> Result<()> {
    let world = logged_in_world()?;

    let result = world.run(&["unit", "list", "--status", "vacant"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("vacant"), "stderr: {}", result.stderr());
    Ok(())
}

#[test]
fn test_lease_rows_resolve_labels_and_activity() -> Result<()> {
    let world = logged_in_world()?;

    let json = world.run_json(&["lease", "list"])?.json()?;
    let leases = &json["content"]["leases"];

    assert_eq!(leases[0]["tenant"], "Ada Park (ada@example.com)");
    assert_eq!(leases[0]["unit"], "101 - North Wing");
    assert_eq!(leases[0]["activity"]["state"], "active");
    assert_eq!(leases[1]["activity"]["state"], "expiring_soon");
    assert_eq!(leases[1]["activity"]["days_left"], 19);
    assert_eq!(leases[2]["activity"]["state"], "expired");
    assert_eq!(json["content"]["as_of"], "2024-06-01");
    Ok(())
}

#[test]
fn test_lease_text_view() -> Result<()> {
    let world = logged_in_world()?;

    let result = world.run(&["lease", "list"])?;

    assert!(result.success());
    let out = result.stdout();
    assert!(out.contains("$1,450.50"));
    assert!(out.contains("Expiring Soon (19d)"));
    assert!(out.contains("Expired"));
    assert!(out.contains("Dec 31, 2024"));
    Ok(())
}

#[test]
fn test_lease_sort_by_rent_both_directions() -> Result<()> {
    let world = logged_in_world()?;

    let asc = world.run_json(&["lease", "list", "--sort", "rent"])?.json()?;
    assertions::assert_row_ids(&asc, "leases", &[3, 2, 1])?;

    let desc = world
        .run_json(&["lease", "list", "--sort", "rent", "--desc"])?
        .json()?;
    assertions::assert_row_ids(&desc, "leases", &[1, 2, 3])?;
    assert_eq!(desc["content"]["meta"]["sort"]["direction"], "descending");
    Ok(())
}

#[test]
fn test_unknown_sort_key_lists_columns() -> Result<()> {
    let world = logged_in_world()?;

    let result = world.run(&["payment", "list", "--sort", "price"])?;

    assert!(!result.success());
    assert!(
        result.stderr().contains(
            "Cannot sort payments by 'price' (choose from: id, tenant, lease, amount, date, status)"
        ),
        "stderr: {}",
        result.stderr()
    );
    Ok(())
}

#[test]
fn test_sort_toggle_is_remembered() -> Result<()> {
    let world = logged_in_world()?;

    let first = world.run_json(&["tenant", "sort", "name"])?.json()?;
    assertions::assert_badge(&first, "tenants now sorted by name")?;
    assert_eq!(first["content"]["direction"], "ascending");

    let second = world.run_json(&["tenant", "sort", "name"])?.json()?;
    assert_eq!(second["content"]["direction"], "descending");

    let list = world.run_json(&["tenant", "list"])?.json()?;
    assertions::assert_row_ids(&list, "tenants", &[3, 2, 1])?;
    assert_eq!(list["content"]["meta"]["sort"]["key"], "name");

    let other = world.run_json(&["tenant", "sort", "contact"])?.json()?;
    assert_eq!(other["content"]["direction"], "ascending");
    Ok(())
}

#[test]
fn test_payment_search_matches_tenant_and_id() -> Result<()> {
    let world = logged_in_world()?;

    let by_name = world.run_json(&["payment", "list", "-s", "ada"])?.json()?;
    assertions::assert_row_ids(&by_name, "payments", &[1, 3])?;

    let by_id = world.run_json(&["payment", "list", "-s", "4"])?.json()?;
    assertions::assert_row_ids(&by_id, "payments", &[4])?;
    Ok(())
}

#[test]
fn test_payment_summary_follows_filters() -> Result<()> {
    let world = logged_in_world()?;

    let all = world.run_json(&["payment", "list"])?.json()?;
    assert_eq!(all["content"]["summary"]["count"], 4);
    assert_eq!(all["content"]["summary"]["completed_count"], 2);
    assert_eq!(all["content"]["summary"]["completed_amount"], 2650.5);

    let pending = world
        .run_json(&["payment", "list", "--status", "pending"])?
        .json()?;
    assertions::assert_row_ids(&pending, "payments", &[3])?;
    assert_eq!(pending["content"]["summary"]["completed_amount"], 0.0);

    let text = world.run(&["payment", "list"])?;
    assert!(text.stdout().contains("4 payments, 2 completed: $2,650.50"));
    Ok(())
}

#[test]
fn test_quiet_mode_prints_ids_only() -> Result<()> {
    let world = logged_in_world()?;

    let result = world.run(&["unit", "list", "--quiet", "--sort", "id", "--desc"])?;

    assert!(result.success());
    assert_eq!(result.stdout(), "4\n3\n2\n1\n");
    Ok(())
}

#[test]
fn test_backend_failure_is_reported_per_command() -> Result<()> {
    let world = TestWorld::new();
    world.server().mock(|when, then| {
        when.method(GET).path("/api/tenants");
        then.status(500)
            .json_body(json!({"message": "Database unavailable"}));
    });
    world.login()?;

    let result = world.run(&["tenant", "list"])?;

    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("Failed to fetch tenants: Database unavailable"),
        "stderr: {}",
        result.stderr()
    );
    Ok(())
}
