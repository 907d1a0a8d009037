use leasedesk_engine::ValidationErrors;
use leasedesk_types::RecordId;
use std::fmt;

/// Result type for leasedesk-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Request exceeded its deadline
    Timeout,

    /// No connection could be made to the backend
    Unreachable { base_url: String },

    /// Backend answered with a non-2xx status
    Server { status: u16, message: Option<String> },

    /// Any other transport failure
    Request(reqwest::Error),

    /// Response body did not match the expected shape
    Decode(String),

    /// Form input rejected before contacting the backend
    Validation(ValidationErrors),

    /// Record missing from the loaded collection
    NotFound { resource: &'static str, id: RecordId },

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Durable key-value storage error
    Storage(String),

    /// Login rejected
    Auth(String),
}

impl Error {
    /// Single human-readable message for transient notices
    pub fn user_message(&self) -> String {
        match self {
            Error::Timeout => {
                "Request timed out. Backend server may be starting up or under heavy load."
                    .to_string()
            }
            Error::Unreachable { base_url } => format!(
                "Cannot connect to backend server. Please ensure it is running at {}.",
                base_url
            ),
            Error::Server {
                message: Some(message),
                ..
            } => message.clone(),
            Error::Server {
                status,
                message: None,
            } => format!("Server error: {}", status),
            Error::Validation(errors) => errors.to_string(),
            Error::Auth(message) => message.clone(),
            other => other.to_string(),
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error, base_url: &str) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() {
            Error::Unreachable {
                base_url: base_url.to_string(),
            }
        } else if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Request(err)
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Timeout | Error::Unreachable { .. } | Error::Server { .. } => {
                f.write_str(&self.user_message())
            }
            Error::Request(err) => write!(f, "Request failed: {}", err),
            Error::Decode(msg) => write!(f, "Unexpected response from backend: {}", msg),
            Error::Validation(errors) => write!(f, "{}", errors),
            Error::NotFound { resource, id } => write!(f, "{} #{} not found", resource, id),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Storage(msg) => write!(f, "Storage error: {}", msg),
            Error::Auth(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Request(err) => Some(err),
            Error::Validation(errors) => Some(errors),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Validation(errors)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_used_verbatim() {
        let err = Error::Server {
            status: 409,
            message: Some("Unit is already leased".to_string()),
        };
        assert_eq!(err.user_message(), "Unit is already leased");
    }

    #[test]
    fn test_server_without_message_reports_status() {
        let err = Error::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Server error: 500");
    }

    #[test]
    fn test_unreachable_names_base_url() {
        let err = Error::Unreachable {
            base_url: "http://localhost:8080/api".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot connect to backend server. Please ensure it is running at http://localhost:8080/api."
        );
    }
}
