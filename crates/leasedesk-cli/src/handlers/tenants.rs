use super::{HandlerContext, confirm_delete, failed, invalid, parse_sort_key, resolve_sort};
use crate::args::ListArgs;
use crate::presentation::presenters;
use crate::presentation::view_models::StatusBadge;
use anyhow::Result;
use leasedesk_engine::{TenantForm, TenantSortKey, TenantSpec, ViewQuery, apply_view};
use leasedesk_runtime::{LeaseDesk, Mutation};
use leasedesk_types::{Record, RecordId, Tenant};

pub fn list(desk: &LeaseDesk, list: &ListArgs, ctx: &HandlerContext) -> Result<()> {
    let tenants = desk
        .tenants()
        .list()
        .map_err(|e| failed("fetch tenants", e))?;

    let query = ViewQuery::new()
        .search(list.search.clone().unwrap_or_default())
        .sort(resolve_sort::<TenantSortKey>(desk, list)?);
    let view = apply_view(&TenantSpec, &tenants, &query);

    ctx.render(presenters::present_tenant_list(tenants.len(), &view, &query))
}

pub fn sort(desk: &LeaseDesk, key: &str, ctx: &HandlerContext) -> Result<()> {
    let key = parse_sort_key::<TenantSortKey>(key)?;
    let spec = desk.preferences().toggle_sort(key)?;
    ctx.render(presenters::present_sort_toggle(spec))
}

pub fn add(desk: &LeaseDesk, name: String, contact: String, ctx: &HandlerContext) -> Result<()> {
    let form = TenantForm {
        name,
        contact_info: contact,
    };
    let draft = form.validate().map_err(|e| invalid(Tenant::NOUN, e))?;

    let mutation = desk
        .tenants()
        .create(&draft)
        .map_err(|e| failed("save tenant", e))?;
    render_mutation(desk, mutation, ctx)
}

pub fn edit(
    desk: &LeaseDesk,
    id: RecordId,
    name: Option<String>,
    contact: Option<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    let current = desk.tenants().get(id).map_err(|e| failed("fetch tenants", e))?;

    let mut form = TenantForm::from(&current);
    if let Some(name) = name {
        form.name = name;
    }
    if let Some(contact) = contact {
        form.contact_info = contact;
    }
    let draft = form.validate().map_err(|e| invalid(Tenant::NOUN, e))?;

    let mutation = desk
        .tenants()
        .update(id, &draft)
        .map_err(|e| failed("save tenant", e))?;
    render_mutation(desk, mutation, ctx)
}

pub fn delete(desk: &LeaseDesk, id: RecordId, yes: bool, ctx: &HandlerContext) -> Result<()> {
    if !confirm_delete(Tenant::NOUN, id, yes)? {
        return ctx.render(presenters::present_cancelled(Tenant::NOUN, id));
    }

    let mutation = desk
        .tenants()
        .delete(id)
        .map_err(|e| failed("delete tenant", e))?;
    render_mutation(desk, mutation, ctx)
}

/// Show the re-fetched collection under the success notice.
fn render_mutation(desk: &LeaseDesk, mutation: Mutation<Tenant>, ctx: &HandlerContext) -> Result<()> {
    let query = ViewQuery::new().sort(desk.preferences().sort::<TenantSortKey>());
    let view = apply_view(&TenantSpec, &mutation.items, &query);

    let result = presenters::present_tenant_list(mutation.items.len(), &view, &query)
        .with_badge(StatusBadge::success(mutation.message()));
    ctx.render(result)
}
