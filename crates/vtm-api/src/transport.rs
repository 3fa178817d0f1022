// Transport configuration for building the reqwest::Client.
//
// TLS mode, timeout and user agent live here so the client module only
// deals with URLs and response shapes.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;

/// Default request timeout. The management API has no deadline of its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// TLS verification mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlsMode {
    /// Use the system certificate store.
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (appliances ship with self-signed certs).
    DangerAcceptInvalid,
}

impl TlsMode {
    /// Whether server certificates are checked at all.
    pub fn verifies(&self) -> bool {
        !matches!(self, Self::DangerAcceptInvalid)
    }
}

/// Transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::DangerAcceptInvalid,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("vtm-api/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    ///
    /// The client is `Send + Sync` and cheap to clone, so a single
    /// instance can serve concurrent calls from many tasks.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str());

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path)
                    .map_err(|e| Error::Tls(format!("failed to read CA cert: {e}")))?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| Error::Tls(format!("invalid CA cert: {e}")))?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}
