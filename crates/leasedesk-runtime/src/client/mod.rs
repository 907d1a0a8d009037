mod desk;
mod preferences;
mod records;

pub use desk::LeaseDesk;
pub use preferences::Preferences;
pub use records::{Mutation, MutationKind, RecordOps};
