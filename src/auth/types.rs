//! Auth configuration types

/// Authentication configuration
#[derive(Clone)]
pub enum AuthConfig {
    /// HTTP Basic authentication
    Basic {
        /// Username (Mailjet public key)
        username: String,
        /// Password (Mailjet private key)
        password: String,
    },
}

impl AuthConfig {
    /// Basic auth from a Mailjet key pair
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}
