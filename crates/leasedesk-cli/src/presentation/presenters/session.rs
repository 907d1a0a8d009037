use leasedesk_types::Identity;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, SessionViewModel, StatusBadge,
};

pub fn present_login(identity: &Identity) -> CommandResultViewModel<SessionViewModel> {
    CommandResultViewModel::new(SessionViewModel {
        username: Some(identity.username.clone()),
    })
    .with_badge(StatusBadge::success(format!("Welcome, {}", identity)))
    .with_suggestion(Guidance::new("See the overview").with_command("leasedesk dashboard"))
}

pub fn present_logout(previous: Option<Identity>) -> CommandResultViewModel<SessionViewModel> {
    let badge = match &previous {
        Some(identity) => StatusBadge::success(format!("Logged out {}", identity)),
        None => StatusBadge::info("No active session"),
    };
    CommandResultViewModel::new(SessionViewModel { username: None }).with_badge(badge)
}

pub fn present_whoami(identity: Option<&Identity>) -> CommandResultViewModel<SessionViewModel> {
    let result = CommandResultViewModel::new(SessionViewModel {
        username: identity.map(|i| i.username.clone()),
    });
    match identity {
        Some(_) => result,
        None => result
            .with_badge(StatusBadge::warning("Not logged in"))
            .with_suggestion(Guidance::new("Log in first").with_command("leasedesk login")),
    }
}
