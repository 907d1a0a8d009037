mod identity;
mod lease;
mod payment;
mod record;
mod tenant;
mod unit;

pub use identity::Identity;
pub use lease::{Lease, LeaseDraft};
pub use payment::{Payment, PaymentDraft, PaymentStatus};
pub use record::{Record, RecordId};
pub use tenant::{Tenant, TenantDraft};
pub use unit::{Unit, UnitDraft, UnitStatus};
