use crate::config::AuthConfig;
use crate::{Error, Result};
use leasedesk_types::Identity;

/// Placeholder credential check against the configured demo account.
pub fn authenticate(username: &str, password: &str, config: &AuthConfig) -> Result<Identity> {
    if username.is_empty() || password.is_empty() {
        return Err(Error::Auth(
            "Please enter both username and password".to_string(),
        ));
    }

    if username != config.username || password != config.password {
        tracing::warn!("Rejected login for '{}'", username);
        return Err(Error::Auth("Invalid username or password".to_string()));
    }

    Ok(Identity::new(username))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_credentials_accepted() {
        let identity =
            authenticate("property_manager", "SecurePass2025!@#", &AuthConfig::default()).unwrap();
        assert_eq!(identity.username, "property_manager");
    }

    #[test]
    fn test_empty_fields_checked_first() {
        let err = authenticate("", "whatever", &AuthConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Please enter both username and password");
    }

    #[test]
    fn test_wrong_password_rejected() {
        let err = authenticate("property_manager", "nope", &AuthConfig::default()).unwrap_err();
        assert_eq!(err.user_message(), "Invalid username or password");
    }
}
