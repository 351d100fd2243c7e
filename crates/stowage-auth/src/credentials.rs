//! Credentials and the asynchronous credential-source capability.
//!
//! Credentials are time-bounded and refreshed by an external source (an
//! instance profile, an assumed role, a config file). The signing layer reads
//! them fresh for every request and never caches them; caching and refresh
//! policy belong to the [`CredentialProvider`] implementation.

use chrono::{DateTime, Utc};

use crate::error::AuthError;

/// A set of AWS-style access credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// The access key ID.
    pub access_key_id: String,
    /// The secret access key.
    pub secret_access_key: String,
    /// Session token for temporary credentials, if any.
    pub session_token: Option<String>,
    /// Expiry of temporary credentials, if known.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Credentials {
    /// Create long-lived credentials from an access key pair.
    #[must_use]
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
            expires_at: None,
        }
    }

    /// Attach a session token, marking these as temporary credentials.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Whether the credentials have expired as of `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| now >= expiry)
    }
}

// Manual Debug so the secret key never lands in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[redacted]")
            .field("session_token", &self.session_token.as_ref().map(|_| "[redacted]"))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Source of time-bounded credentials, read fresh per request.
#[async_trait::async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Retrieve the current credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Retrieve`] if no credentials are available.
    async fn retrieve(&self) -> Result<Credentials, AuthError>;
}

/// Credential provider backed by a fixed credential set.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credentials: Credentials,
}

impl StaticCredentialProvider {
    /// Create a provider that always returns `credentials`.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

#[async_trait::async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn retrieve(&self) -> Result<Credentials, AuthError> {
        Ok(self.credentials.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_should_report_expiry_against_given_instant() {
        let expiry = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let creds = Credentials {
            expires_at: Some(expiry),
            ..Credentials::new("AKID", "secret")
        };

        assert!(!creds.is_expired(expiry - chrono::Duration::minutes(1)));
        assert!(creds.is_expired(expiry));
    }

    #[test]
    fn test_should_never_expire_without_expiry() {
        let creds = Credentials::new("AKID", "secret");
        assert!(!creds.is_expired(Utc::now()));
    }

    #[test]
    fn test_should_redact_secret_in_debug_output() {
        let creds = Credentials::new("AKID", "hunter2").with_session_token("tok");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("tok"));
        assert!(debug.contains("AKID"));
    }

    #[tokio::test]
    async fn test_should_retrieve_static_credentials() {
        let provider = StaticCredentialProvider::new(Credentials::new("AKID", "secret"));
        let creds = provider.retrieve().await.unwrap();
        assert_eq!(creds.access_key_id, "AKID");
    }
}
