use super::{HandlerContext, failed};
use crate::presentation::presenters;
use anyhow::Result;
use leasedesk_runtime::LeaseDesk;

/// Missing credentials are passed through as empty so the authenticator
/// reports them.
pub fn login(
    desk: &mut LeaseDesk,
    username: Option<String>,
    password: Option<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    let identity = desk
        .login(
            username.as_deref().unwrap_or_default(),
            password.as_deref().unwrap_or_default(),
        )
        .map_err(|e| failed("log in", e))?;
    ctx.render(presenters::present_login(&identity))
}

pub fn logout(desk: &mut LeaseDesk, ctx: &HandlerContext) -> Result<()> {
    let previous = desk.identity().cloned();
    desk.logout()?;
    ctx.render(presenters::present_logout(previous))
}

pub fn whoami(desk: &LeaseDesk, ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_whoami(desk.identity()))
}
