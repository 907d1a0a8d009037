use std::fmt;

use leasedesk_engine::SortDirection;

use crate::presentation::view_models::{
    CancelledViewModel, CreateView, SortToggleViewModel, ViewMode,
};

impl CreateView for SortToggleViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(SortToggleView { data: self })
    }
}

struct SortToggleView<'a> {
    data: &'a SortToggleViewModel,
}

impl fmt::Display for SortToggleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.data.direction {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        };
        writeln!(f, "Sorting {} by {} {}", self.data.screen, self.data.key, arrow)
    }
}

impl CreateView for CancelledViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CancelledView { data: self })
    }
}

struct CancelledView<'a> {
    data: &'a CancelledViewModel,
}

impl fmt::Display for CancelledView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} #{} was not deleted", self.data.entity, self.data.id)
    }
}
