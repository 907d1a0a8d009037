use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use leasedesk_runtime::{ConnectionState, LeaseDesk};

/// One probe, or with `wait` keep probing until the backend answers.
///
/// Intermediate failures go to stderr so stdout carries only the final
/// result.
pub fn handle(
    desk: &LeaseDesk,
    wait: bool,
    max_attempts: Option<u32>,
    ctx: &HandlerContext,
) -> Result<()> {
    let mut monitor = desk.monitor();
    let base_url = desk.api().base_url().to_string();

    let (state, probes) = if wait {
        let mut probes = 0u32;
        let state = monitor.run_until_connected(max_attempts, std::thread::sleep, |state| {
            probes += 1;
            if let ConnectionState::Disconnected {
                message, attempts, ..
            } = state
            {
                eprintln!("{} (Attempt {})", message, attempts);
            }
        });
        (state, probes)
    } else {
        (monitor.check().clone(), 1)
    };

    let connected = state.is_connected();
    ctx.render(presenters::present_connection(&base_url, state, probes))?;

    if !connected {
        anyhow::bail!("Backend at {} did not respond", base_url);
    }
    Ok(())
}
