use std::fmt;

use crate::presentation::view_models::{CreateView, SessionViewModel, ViewMode};

impl CreateView for SessionViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(SessionView { data: self })
    }
}

struct SessionView<'a> {
    data: &'a SessionViewModel,
}

impl fmt::Display for SessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.username {
            Some(username) => writeln!(f, "Logged in as {}", username),
            None => writeln!(f, "Not logged in"),
        }
    }
}
