use super::{HandlerContext, failed};
use crate::presentation::presenters;
use anyhow::Result;
use leasedesk_runtime::LeaseDesk;

pub fn handle(desk: &LeaseDesk, ctx: &HandlerContext) -> Result<()> {
    let stats = desk
        .dashboard(ctx.today)
        .map_err(|e| failed("fetch dashboard data", e))?;
    ctx.render(presenters::present_dashboard(stats, ctx.today))
}
