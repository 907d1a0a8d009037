pub mod common;
pub mod config;
pub mod dashboard;
pub mod listing;
pub mod mutation;
pub mod records;
pub mod result;
pub mod session;
pub mod status;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use config::ConfigViewModel;
pub use dashboard::{DashboardViewModel, RecentPaymentViewModel};
pub use listing::{EmptyState, ListMeta, SortViewModel};
pub use mutation::{CancelledViewModel, SortToggleViewModel};
pub use records::{
    LeaseListViewModel, LeaseRowViewModel, PaymentListViewModel, PaymentRowViewModel,
    PaymentSummaryViewModel, TenantListViewModel, TenantRowViewModel, UnitListViewModel,
    UnitRowViewModel,
};
pub use result::CommandResultViewModel;
pub use session::SessionViewModel;
pub use status::ConnectionViewModel;

use std::fmt;

/// Bridges a view model to its text view for the given density.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
