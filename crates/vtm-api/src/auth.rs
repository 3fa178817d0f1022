use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

/// Basic-auth credentials for the management API.
///
/// The password is held as a [`SecretString`] so it never shows up in
/// `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Basic <base64(username:password)>`, standard alphabet with padding.
    pub fn encoded(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password.expose_secret());
        format!("Basic {}", STANDARD.encode(raw))
    }

    /// The `Authorization` header value, flagged sensitive so reqwest
    /// redacts it from its own debug output.
    pub fn basic_auth_header(&self) -> HeaderValue {
        // Base64 output plus the `Basic ` prefix is always visible ASCII.
        let mut value = HeaderValue::from_str(&self.encoded())
            .unwrap_or_else(|_| HeaderValue::from_static("Basic"));
        value.set_sensitive(true);
        value
    }
}
