use super::{HandlerContext, confirm_delete, failed, invalid, parse_sort_key, resolve_sort};
use crate::args::ListArgs;
use crate::presentation::presenters;
use crate::presentation::view_models::StatusBadge;
use anyhow::Result;
use leasedesk_engine::{StatusFilter, UnitForm, UnitSortKey, UnitSpec, ViewQuery, apply_view};
use leasedesk_runtime::{LeaseDesk, Mutation};
use leasedesk_types::{Record, RecordId, Unit, UnitStatus};

pub fn list(
    desk: &LeaseDesk,
    list: &ListArgs,
    status: Option<&str>,
    ctx: &HandlerContext,
) -> Result<()> {
    let status: StatusFilter<UnitStatus> = match status {
        Some(raw) => raw.parse()?,
        None => StatusFilter::All,
    };

    let units = desk.units().list().map_err(|e| failed("fetch units", e))?;

    let query = ViewQuery::new()
        .search(list.search.clone().unwrap_or_default())
        .status(status)
        .sort(resolve_sort::<UnitSortKey>(desk, list)?);
    let view = apply_view(&UnitSpec, &units, &query);

    ctx.render(presenters::present_unit_list(units.len(), &view, &query))
}

pub fn sort(desk: &LeaseDesk, key: &str, ctx: &HandlerContext) -> Result<()> {
    let key = parse_sort_key::<UnitSortKey>(key)?;
    let spec = desk.preferences().toggle_sort(key)?;
    ctx.render(presenters::present_sort_toggle(spec))
}

pub fn add(
    desk: &LeaseDesk,
    number: String,
    building: String,
    status: UnitStatus,
    ctx: &HandlerContext,
) -> Result<()> {
    let form = UnitForm {
        unit_number: number,
        building,
        status,
    };
    let draft = form.validate().map_err(|e| invalid(Unit::NOUN, e))?;

    let mutation = desk
        .units()
        .create(&draft)
        .map_err(|e| failed("save unit", e))?;
    render_mutation(desk, mutation, ctx)
}

pub fn edit(
    desk: &LeaseDesk,
    id: RecordId,
    number: Option<String>,
    building: Option<String>,
    status: Option<UnitStatus>,
    ctx: &HandlerContext,
) -> Result<()> {
    let current = desk.units().get(id).map_err(|e| failed("fetch units", e))?;

    let mut form = UnitForm::from(&current);
    if let Some(number) = number {
        form.unit_number = number;
    }
    if let Some(building) = building {
        form.building = building;
    }
    if let Some(status) = status {
        form.status = status;
    }
    let draft = form.validate().map_err(|e| invalid(Unit::NOUN, e))?;

    let mutation = desk
        .units()
        .update(id, &draft)
        .map_err(|e| failed("save unit", e))?;
    render_mutation(desk, mutation, ctx)
}

pub fn delete(desk: &LeaseDesk, id: RecordId, yes: bool, ctx: &HandlerContext) -> Result<()> {
    if !confirm_delete(Unit::NOUN, id, yes)? {
        return ctx.render(presenters::present_cancelled(Unit::NOUN, id));
    }

    let mutation = desk
        .units()
        .delete(id)
        .map_err(|e| failed("delete unit", e))?;
    render_mutation(desk, mutation, ctx)
}

fn render_mutation(desk: &LeaseDesk, mutation: Mutation<Unit>, ctx: &HandlerContext) -> Result<()> {
    let query = ViewQuery::new().sort(desk.preferences().sort::<UnitSortKey>());
    let view = apply_view(&UnitSpec, &mutation.items, &query);

    let result = presenters::present_unit_list(mutation.items.len(), &view, &query)
        .with_badge(StatusBadge::success(mutation.message()));
    ctx.render(result)
}
