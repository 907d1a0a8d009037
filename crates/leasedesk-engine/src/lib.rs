// Engine module - pure derivations over already-loaded collections.
// Nothing here performs I/O; every function is total over its inputs and
// takes "today" explicitly where dates matter.

pub mod activity;
pub mod calendar;
pub mod collections;
pub mod lookup;
pub mod summary;
pub mod validation;
pub mod view;

pub use activity::{EXPIRING_SOON_DAYS, LeaseActivity, classify_lease};
pub use calendar::{days_until, is_lease_active};
pub use collections::{
    ColumnKey, LeaseSortKey, LeaseSpec, PaymentSortKey, PaymentSpec, TenantSortKey, TenantSpec,
    UnitSortKey, UnitSpec,
};
pub use lookup::{UNKNOWN_LABEL, available_units, find_by_id, leases_for_tenant};
pub use summary::{DashboardStats, PaymentSummary, completed_total, summarize_payments};
pub use validation::{
    FieldError, FormMode, LeaseForm, PaymentForm, TenantForm, UnitForm, ValidationErrors,
};
pub use view::{
    CollectionSpec, SortDirection, SortSpec, SortValue, StatusFilter, ViewQuery, apply_view,
};
