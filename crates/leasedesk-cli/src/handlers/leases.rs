use super::{HandlerContext, confirm_delete, failed, invalid, parse_sort_key, resolve_sort};
use crate::args::ListArgs;
use crate::presentation::presenters;
use crate::presentation::view_models::StatusBadge;
use anyhow::Result;
use leasedesk_engine::{FormMode, LeaseForm, LeaseSortKey, LeaseSpec, ViewQuery, apply_view};
use leasedesk_runtime::{LeaseDesk, Mutation};
use leasedesk_types::{Lease, Record, RecordId, Tenant, Unit};

/// Tenants and units the lease rows resolve their labels against
fn lookups(desk: &LeaseDesk) -> Result<(Vec<Tenant>, Vec<Unit>)> {
    let tenants = desk
        .tenants()
        .list()
        .map_err(|e| failed("fetch tenants", e))?;
    let units = desk.units().list().map_err(|e| failed("fetch units", e))?;
    Ok((tenants, units))
}

pub fn list(desk: &LeaseDesk, list: &ListArgs, ctx: &HandlerContext) -> Result<()> {
    let leases = desk.leases().list().map_err(|e| failed("fetch leases", e))?;
    let (tenants, units) = lookups(desk)?;

    let query = ViewQuery::new()
        .search(list.search.clone().unwrap_or_default())
        .sort(resolve_sort::<LeaseSortKey>(desk, list)?);
    let view = apply_view(&LeaseSpec::new(&tenants, &units), &leases, &query);

    ctx.render(presenters::present_lease_list(
        leases.len(),
        &view,
        &tenants,
        &units,
        &query,
        ctx.today,
    ))
}

pub fn sort(desk: &LeaseDesk, key: &str, ctx: &HandlerContext) -> Result<()> {
    let key = parse_sort_key::<LeaseSortKey>(key)?;
    let spec = desk.preferences().toggle_sort(key)?;
    ctx.render(presenters::present_sort_toggle(spec))
}

pub fn add(desk: &LeaseDesk, form: LeaseForm, ctx: &HandlerContext) -> Result<()> {
    save(desk, FormMode::Create, form, ctx)
}

/// `overrides` replaces only the fields it sets.
pub fn edit(desk: &LeaseDesk, id: RecordId, overrides: LeaseForm, ctx: &HandlerContext) -> Result<()> {
    let current = desk.leases().get(id).map_err(|e| failed("fetch leases", e))?;

    let base = LeaseForm::from(&current);
    let form = LeaseForm {
        tenant_id: overrides.tenant_id.or(base.tenant_id),
        unit_id: overrides.unit_id.or(base.unit_id),
        start_date: overrides.start_date.or(base.start_date),
        end_date: overrides.end_date.or(base.end_date),
        rent_amount: overrides.rent_amount.or(base.rent_amount),
    };
    save(desk, FormMode::Edit(id), form, ctx)
}

fn save(desk: &LeaseDesk, mode: FormMode, form: LeaseForm, ctx: &HandlerContext) -> Result<()> {
    let units = desk.units().list().map_err(|e| failed("fetch units", e))?;
    let draft = form
        .validate(mode, &units)
        .map_err(|e| invalid(Lease::NOUN, e))?;

    let mutation = desk
        .leases()
        .save(mode, &draft)
        .map_err(|e| failed("save lease", e))?;
    render_mutation(desk, mutation, ctx)
}

pub fn delete(desk: &LeaseDesk, id: RecordId, yes: bool, ctx: &HandlerContext) -> Result<()> {
    if !confirm_delete(Lease::NOUN, id, yes)? {
        return ctx.render(presenters::present_cancelled(Lease::NOUN, id));
    }

    let mutation = desk
        .leases()
        .delete(id)
        .map_err(|e| failed("delete lease", e))?;
    render_mutation(desk, mutation, ctx)
}

fn render_mutation(desk: &LeaseDesk, mutation: Mutation<Lease>, ctx: &HandlerContext) -> Result<()> {
    let (tenants, units) = lookups(desk)?;
    let query = ViewQuery::new().sort(desk.preferences().sort::<LeaseSortKey>());
    let view = apply_view(&LeaseSpec::new(&tenants, &units), &mutation.items, &query);

    let result = presenters::present_lease_list(
        mutation.items.len(),
        &view,
        &tenants,
        &units,
        &query,
        ctx.today,
    )
    .with_badge(StatusBadge::success(mutation.message()));
    ctx.render(result)
}
