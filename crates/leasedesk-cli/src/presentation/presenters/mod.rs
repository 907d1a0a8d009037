pub mod config;
pub mod dashboard;
pub mod records;
pub mod session;
pub mod status;

pub use config::present_config;
pub use dashboard::present_dashboard;
pub use records::{
    present_cancelled, present_lease_list, present_payment_list, present_sort_toggle,
    present_tenant_list, present_unit_list,
};
pub use session::{present_login, present_logout, present_whoami};
pub use status::present_connection;
