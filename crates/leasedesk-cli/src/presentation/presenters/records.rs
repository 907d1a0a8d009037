use chrono::NaiveDate;
use leasedesk_engine::lookup::{tenant_label, tenant_name, unit_label};
use leasedesk_engine::{
    ColumnKey, LeaseSortKey, PaymentSortKey, SortSpec, StatusFilter, TenantSortKey,
    UnitSortKey, ViewQuery, classify_lease, summarize_payments,
};
use leasedesk_types::{Lease, Payment, PaymentStatus, RecordId, Tenant, Unit, UnitStatus};
use std::convert::Infallible;
use std::fmt::Display;

use crate::presentation::view_models::{
    CancelledViewModel, CommandResultViewModel, EmptyState, Guidance, LeaseListViewModel,
    LeaseRowViewModel, ListMeta, PaymentListViewModel, PaymentRowViewModel,
    PaymentSummaryViewModel, SortToggleViewModel, StatusBadge, TenantListViewModel,
    TenantRowViewModel, UnitListViewModel, UnitRowViewModel,
};

fn list_meta<K, S>(
    entity: &'static str,
    total: usize,
    shown: usize,
    query: &ViewQuery<K, S>,
) -> ListMeta
where
    K: Copy + PartialEq + Display,
    S: Display,
{
    let empty = match (shown, query.is_filtered()) {
        (0, false) => Some(EmptyState::NoRecords),
        (0, true) => Some(EmptyState::NoResults),
        _ => None,
    };

    ListMeta {
        entity,
        total,
        shown,
        search: (!query.search.is_empty()).then(|| query.search.clone()),
        status: match &query.status {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(status.to_string()),
        },
        sort: query.sort.map(Into::into),
        empty,
    }
}

/// Attach the empty-state hint matching `meta`
fn with_empty_hint<T: serde::Serialize>(
    result: CommandResultViewModel<T>,
    meta: &ListMeta,
    add_command: &str,
) -> CommandResultViewModel<T> {
    match meta.empty {
        Some(EmptyState::NoRecords) => result.with_suggestion(
            Guidance::new(format!("Create the first record in {}", meta.entity))
                .with_command(add_command),
        ),
        Some(EmptyState::NoResults) => result.with_suggestion(Guidance::new(
            "Try a different search term or status filter",
        )),
        None => result,
    }
}

pub fn present_tenant_list(
    total: usize,
    view: &[&Tenant],
    query: &ViewQuery<TenantSortKey, Infallible>,
) -> CommandResultViewModel<TenantListViewModel> {
    let meta = list_meta("tenants", total, view.len(), query);
    let tenants = view
        .iter()
        .map(|tenant| TenantRowViewModel {
            id: tenant.id,
            name: tenant.name.clone(),
            contact_info: tenant.contact_info.clone(),
        })
        .collect();

    let result = CommandResultViewModel::new(TenantListViewModel {
        meta: meta.clone(),
        tenants,
    });
    with_empty_hint(
        result,
        &meta,
        "leasedesk tenant add --name <NAME> --contact <EMAIL|PHONE>",
    )
}

pub fn present_unit_list(
    total: usize,
    view: &[&Unit],
    query: &ViewQuery<UnitSortKey, UnitStatus>,
) -> CommandResultViewModel<UnitListViewModel> {
    let meta = list_meta("units", total, view.len(), query);
    let units = view
        .iter()
        .map(|unit| UnitRowViewModel {
            id: unit.id,
            unit_number: unit.unit_number.clone(),
            building: unit.building.clone(),
            status: unit.status,
        })
        .collect();

    let result = CommandResultViewModel::new(UnitListViewModel {
        meta: meta.clone(),
        units,
    });
    with_empty_hint(
        result,
        &meta,
        "leasedesk unit add --number <NUMBER> --building <BUILDING>",
    )
}

pub fn present_lease_list(
    total: usize,
    view: &[&Lease],
    tenants: &[Tenant],
    units: &[Unit],
    query: &ViewQuery<LeaseSortKey, Infallible>,
    today: NaiveDate,
) -> CommandResultViewModel<LeaseListViewModel> {
    let meta = list_meta("leases", total, view.len(), query);
    let leases = view
        .iter()
        .map(|lease| LeaseRowViewModel {
            id: lease.id,
            tenant_id: lease.tenant_id,
            tenant: tenant_label(tenants, lease.tenant_id),
            unit_id: lease.unit_id,
            unit: unit_label(units, lease.unit_id),
            start_date: lease.start_date,
            end_date: lease.end_date,
            rent_amount: lease.rent_amount,
            activity: classify_lease(lease, today),
        })
        .collect();

    let result = CommandResultViewModel::new(LeaseListViewModel {
        meta: meta.clone(),
        as_of: today,
        leases,
    });
    with_empty_hint(
        result,
        &meta,
        "leasedesk lease add --tenant <ID> --unit <ID> --start <DATE> --end <DATE> --rent <AMOUNT>",
    )
}

pub fn present_payment_list(
    total: usize,
    view: &[&Payment],
    tenants: &[Tenant],
    query: &ViewQuery<PaymentSortKey, PaymentStatus>,
) -> CommandResultViewModel<PaymentListViewModel> {
    let meta = list_meta("payments", total, view.len(), query);
    let summary = summarize_payments(view);
    let payments = view
        .iter()
        .map(|payment| PaymentRowViewModel {
            id: payment.id,
            tenant_id: payment.tenant_id,
            tenant: tenant_name(tenants, payment.tenant_id).to_string(),
            lease_id: payment.lease_id,
            amount: payment.amount,
            payment_date: payment.payment_date,
            status: payment.status,
        })
        .collect();

    let result = CommandResultViewModel::new(PaymentListViewModel {
        meta: meta.clone(),
        summary: PaymentSummaryViewModel {
            count: summary.count,
            completed_count: summary.completed_count,
            completed_amount: summary.completed_amount,
        },
        payments,
    });
    with_empty_hint(
        result,
        &meta,
        "leasedesk payment add --tenant <ID> --lease <ID> --amount <AMOUNT> --date <DATE>",
    )
}

pub fn present_sort_toggle<K: ColumnKey + Display>(
    spec: SortSpec<K>,
) -> CommandResultViewModel<SortToggleViewModel> {
    CommandResultViewModel::new(SortToggleViewModel {
        screen: K::SCREEN,
        key: spec.key.to_string(),
        direction: spec.direction,
    })
    .with_badge(StatusBadge::success(format!(
        "{} now sorted by {}",
        K::SCREEN,
        spec.key
    )))
    .with_suggestion(
        Guidance::new("Run the same command again to flip the direction")
            .with_command(format!("leasedesk {} sort {}", singular(K::SCREEN), spec.key)),
    )
}

pub fn present_cancelled(
    entity: &'static str,
    id: RecordId,
) -> CommandResultViewModel<CancelledViewModel> {
    CommandResultViewModel::new(CancelledViewModel { entity, id })
        .with_badge(StatusBadge::info("Delete cancelled"))
}

fn singular(screen: &str) -> &str {
    screen.strip_suffix('s').unwrap_or(screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leasedesk_engine::{LeaseActivity, TenantSpec, apply_view};
    use rust_decimal::Decimal;

    fn tenants() -> Vec<Tenant> {
        vec![
            Tenant {
                id: 1,
                name: "Ada Park".to_string(),
                contact_info: "ada@example.com".to_string(),
            },
            Tenant {
                id: 2,
                name: "Bo Chen".to_string(),
                contact_info: "555-123-4567".to_string(),
            },
        ]
    }

    #[test]
    fn test_unfiltered_empty_list_is_no_records() {
        let query = ViewQuery::new();
        let result = present_tenant_list(0, &[], &query);

        assert_eq!(result.content.meta.empty, Some(EmptyState::NoRecords));
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_filtered_empty_list_is_no_results() {
        let tenants = tenants();
        let query = ViewQuery::new().search("zzz");
        let view = apply_view(&TenantSpec, &tenants, &query);
        let result = present_tenant_list(tenants.len(), &view, &query);

        assert_eq!(result.content.meta.empty, Some(EmptyState::NoResults));
        assert_eq!(result.content.meta.total, 2);
        assert_eq!(result.content.meta.search.as_deref(), Some("zzz"));
    }

    #[test]
    fn test_lease_rows_resolve_labels_and_activity() {
        let tenants = tenants();
        let lease = Lease {
            id: 4,
            tenant_id: 1,
            unit_id: 99,
            start_date: "2024-01-01".parse().unwrap(),
            end_date: "2024-12-31".parse().unwrap(),
            rent_amount: Decimal::from(1200),
        };
        let query = ViewQuery::new();
        let result = present_lease_list(
            1,
            &[&lease],
            &tenants,
            &[],
            &query,
            "2024-12-15".parse().unwrap(),
        );

        let row = &result.content.leases[0];
        assert_eq!(row.tenant, "Ada Park (ada@example.com)");
        assert_eq!(row.unit, "Unknown");
        assert_eq!(row.activity, LeaseActivity::ExpiringSoon { days_left: 16 });
    }

    #[test]
    fn test_payment_summary_covers_filtered_rows() {
        let payment = |id: i64, amount: i64, status: PaymentStatus| Payment {
            id,
            tenant_id: 1,
            lease_id: 1,
            amount: Decimal::from(amount),
            payment_date: "2024-02-01".parse().unwrap(),
            status,
        };
        let payments = [
            payment(1, 100, PaymentStatus::Completed),
            payment(2, 50, PaymentStatus::Pending),
            payment(3, 25, PaymentStatus::Completed),
        ];
        let view: Vec<&Payment> = payments.iter().collect();
        let result = present_payment_list(5, &view, &tenants(), &ViewQuery::new());

        assert_eq!(result.content.summary.count, 3);
        assert_eq!(result.content.summary.completed_amount, Decimal::from(125));
        assert_eq!(result.content.payments[1].tenant, "Ada Park");
    }
}
