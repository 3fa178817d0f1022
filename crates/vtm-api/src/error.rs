use thiserror::Error;

/// Top-level error type for the `vtm-api` crate.
///
/// Every accessor propagates these unchanged from the shared request
/// primitive. Nothing is retried and no partial results are returned.
#[derive(Debug, Error)]
pub enum Error {
    // ── HTTP status ─────────────────────────────────────────────────
    /// The appliance answered with anything other than `200 OK`.
    ///
    /// `message` is the raw response body, never parsed.
    #[error("{status} {message}")]
    Api { status: u16, message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, TLS handshake, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The composed base path is a valid URL but not an HTTP(S) one,
    /// usually because the host was given without a scheme.
    #[error("Unsupported URL scheme `{scheme}` (host must start with http:// or https://)")]
    UnsupportedScheme { scheme: String },

    /// A resource name that would change the path structure (empty, `.`, `..`).
    #[error("Invalid resource name `{segment}` in path")]
    InvalidSegment { segment: String },

    /// The HTTP client could not be built (bad CA file, TLS backend failure).
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Data ────────────────────────────────────────────────────────
    /// A `200 OK` body that is not valid JSON or not a JSON object.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// A `200 OK` body that parsed but lacks the expected top-level field.
    #[error("Response from {url} has no `{field}` field")]
    MissingField { field: &'static str, url: String },
}

impl Error {
    /// The HTTP status carried by this error.
    ///
    /// `None` means the failure happened before a status was received
    /// (transport) or after a successful one (parse/shape).
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the appliance reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the failure is worth retrying at the call site.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => matches!(status, 502..=504),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_status_then_body() {
        let err = Error::Api {
            status: 404,
            message: "not found".into(),
        };
        assert_eq!(err.to_string(), "404 not found");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert!(!err.is_transient());
    }

    #[test]
    fn gateway_errors_are_transient() {
        let err = Error::Api {
            status: 503,
            message: String::new(),
        };
        assert!(err.is_transient());
    }

    #[test]
    fn structural_errors_have_no_status() {
        let err = Error::MissingField {
            field: "children",
            url: "https://vtm:9070/api/tm/3.4/status".into(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("`children`"));
    }
}
