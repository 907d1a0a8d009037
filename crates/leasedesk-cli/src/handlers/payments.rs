use super::{HandlerContext, confirm_delete, failed, invalid, parse_sort_key, resolve_sort};
use crate::args::ListArgs;
use crate::presentation::presenters;
use crate::presentation::view_models::StatusBadge;
use anyhow::Result;
use leasedesk_engine::{
    FormMode, PaymentForm, PaymentSortKey, PaymentSpec, StatusFilter, ViewQuery, apply_view,
};
use leasedesk_runtime::{LeaseDesk, Mutation};
use leasedesk_types::{Payment, PaymentStatus, Record, RecordId};

pub fn list(
    desk: &LeaseDesk,
    list: &ListArgs,
    status: Option<&str>,
    ctx: &HandlerContext,
) -> Result<()> {
    let status: StatusFilter<PaymentStatus> = match status {
        Some(raw) => raw.parse()?,
        None => StatusFilter::All,
    };

    let payments = desk
        .payments()
        .list()
        .map_err(|e| failed("fetch payments", e))?;
    let tenants = desk
        .tenants()
        .list()
        .map_err(|e| failed("fetch tenants", e))?;

    let query = ViewQuery::new()
        .search(list.search.clone().unwrap_or_default())
        .status(status)
        .sort(resolve_sort::<PaymentSortKey>(desk, list)?);
    let view = apply_view(&PaymentSpec::new(&tenants), &payments, &query);

    ctx.render(presenters::present_payment_list(
        payments.len(),
        &view,
        &tenants,
        &query,
    ))
}

pub fn sort(desk: &LeaseDesk, key: &str, ctx: &HandlerContext) -> Result<()> {
    let key = parse_sort_key::<PaymentSortKey>(key)?;
    let spec = desk.preferences().toggle_sort(key)?;
    ctx.render(presenters::present_sort_toggle(spec))
}

pub fn add(desk: &LeaseDesk, form: PaymentForm, ctx: &HandlerContext) -> Result<()> {
    save(desk, FormMode::Create, form, ctx)
}

/// `overrides` replaces the fields it sets; `status` replaces when given.
pub fn edit(
    desk: &LeaseDesk,
    id: RecordId,
    overrides: PaymentForm,
    status: Option<PaymentStatus>,
    ctx: &HandlerContext,
) -> Result<()> {
    let current = desk
        .payments()
        .get(id)
        .map_err(|e| failed("fetch payments", e))?;

    let base = PaymentForm::from(&current);
    let form = PaymentForm {
        tenant_id: overrides.tenant_id.or(base.tenant_id),
        lease_id: overrides.lease_id.or(base.lease_id),
        amount: overrides.amount.or(base.amount),
        payment_date: overrides.payment_date.or(base.payment_date),
        status: status.unwrap_or(base.status),
    };
    save(desk, FormMode::Edit(id), form, ctx)
}

fn save(desk: &LeaseDesk, mode: FormMode, form: PaymentForm, ctx: &HandlerContext) -> Result<()> {
    let leases = desk.leases().list().map_err(|e| failed("fetch leases", e))?;
    let draft = form.validate(&leases).map_err(|e| invalid(Payment::NOUN, e))?;

    let mutation = desk
        .payments()
        .save(mode, &draft)
        .map_err(|e| failed("save payment", e))?;
    render_mutation(desk, mutation, ctx)
}

pub fn delete(desk: &LeaseDesk, id: RecordId, yes: bool, ctx: &HandlerContext) -> Result<()> {
    if !confirm_delete(Payment::NOUN, id, yes)? {
        return ctx.render(presenters::present_cancelled(Payment::NOUN, id));
    }

    let mutation = desk
        .payments()
        .delete(id)
        .map_err(|e| failed("delete payment", e))?;
    render_mutation(desk, mutation, ctx)
}

fn render_mutation(
    desk: &LeaseDesk,
    mutation: Mutation<Payment>,
    ctx: &HandlerContext,
) -> Result<()> {
    let tenants = desk
        .tenants()
        .list()
        .map_err(|e| failed("fetch tenants", e))?;
    let query = ViewQuery::new().sort(desk.preferences().sort::<PaymentSortKey>());
    let view = apply_view(&PaymentSpec::new(&tenants), &mutation.items, &query);

    let result = presenters::present_payment_list(mutation.items.len(), &view, &tenants, &query)
        .with_badge(StatusBadge::success(mutation.message()));
    ctx.render(result)
}
