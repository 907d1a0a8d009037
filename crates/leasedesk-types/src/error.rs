use std::fmt;

/// Result type for leasedesk-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A status string did not name a known variant
    UnknownStatus { kind: &'static str, value: String },

    /// A sort key string did not name a sortable column
    UnknownSortKey { screen: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownStatus { kind, value } => {
                write!(f, "Unknown {} status: '{}'", kind, value)
            }
            Error::UnknownSortKey { screen, value } => {
                write!(f, "Cannot sort {} by '{}'", screen, value)
            }
        }
    }
}

impl std::error::Error for Error {}
