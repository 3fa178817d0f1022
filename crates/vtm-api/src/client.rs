// Management API HTTP client
//
// Wraps `reqwest::Client` with base-path construction, header injection,
// status validation and the two response shapes the API uses (tree
// listings and statistics leaves). Endpoint modules (pools, nodes, etc.)
// add inherent methods in separate files so this module stays focused on
// transport mechanics.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::models::{StatisticsMap, StatisticsResponse, TreeResponse};
use crate::transport::{TlsMode, TransportConfig};

/// Management API port used when none is given.
pub const DEFAULT_PORT: u16 = 9070;

/// REST API version used when none is given.
pub const DEFAULT_API_VERSION: &str = "3.4";

/// Connection parameters for one appliance.
///
/// `host` includes the scheme, e.g. `https://vtm1.example.com`. Port and
/// version are appended to form the base path
/// `<host>:<port>/api/tm/<version>`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub credentials: Credentials,
    pub port: u16,
    pub api_version: String,
    pub transport: TransportConfig,
}

impl ClientConfig {
    /// Defaults: port 9070, API version 3.4, TLS verification off.
    pub fn new(host: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            host: host.into(),
            credentials,
            port: DEFAULT_PORT,
            api_version: DEFAULT_API_VERSION.to_owned(),
            transport: TransportConfig::default(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Turn certificate verification on (system roots) or off.
    ///
    /// Enabling keeps an already configured custom CA.
    pub fn with_tls_verification(mut self, verify: bool) -> Self {
        self.transport.tls = match (verify, self.transport.tls) {
            (false, _) => TlsMode::DangerAcceptInvalid,
            (true, TlsMode::CustomCa(path)) => TlsMode::CustomCa(path),
            (true, _) => TlsMode::System,
        };
        self
    }

    /// Verify the appliance certificate against a PEM CA bundle.
    pub fn with_ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.transport.tls = TlsMode::CustomCa(path.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport.timeout = timeout;
        self
    }

    /// `<host>:<port>/api/tm/<version>`
    pub fn base_path(&self) -> String {
        format!(
            "{}:{}/api/tm/{}",
            self.host.trim_end_matches('/'),
            self.port,
            self.api_version
        )
    }

    /// `Authorization` plus `Content-Type: application/json`, sent with every request.
    fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.credentials.basic_auth_header());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

/// HTTP client for the Traffic Manager REST management API.
///
/// Every method performs exactly one GET and either returns the parsed
/// payload or an [`Error`]. The client holds no mutable state, and the
/// underlying `reqwest::Client` is safe to share across tasks, so one
/// instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct VtmClient {
    http: reqwest::Client,
    base_url: Url,
    base_path: String,
    api_version: String,
    headers: HeaderMap,
    verifies_tls: bool,
}

impl VtmClient {
    /// Build a client from `config`. No request is sent.
    ///
    /// Logs a warning when certificate verification is disabled.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let http = config.transport.build_client()?;
        Self::with_client(http, config)
    }

    /// Create a client around a pre-built `reqwest::Client`.
    ///
    /// The TLS and timeout settings in `config.transport` are ignored;
    /// those belong to `http`. Auth headers are still attached per request.
    pub fn with_client(http: reqwest::Client, config: &ClientConfig) -> Result<Self, Error> {
        let base_path = config.base_path();
        let base_url = Url::parse(&base_path)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::UnsupportedScheme {
                scheme: base_url.scheme().to_owned(),
            });
        }

        let verifies_tls = config.transport.tls.verifies();
        if !verifies_tls {
            warn!(
                base = %base_path,
                "TLS certificate verification is disabled for this client"
            );
        }

        Ok(Self {
            http,
            base_url,
            base_path,
            api_version: config.api_version.clone(),
            headers: config.request_headers(),
            verifies_tls,
        })
    }

    /// The composed `<host>:<port>/api/tm/<version>` string.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// The base path as a parsed URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn verifies_tls(&self) -> bool {
        self.verifies_tls
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Append percent-encoded `segments` to the base path.
    ///
    /// Empty, `.` and `..` segments are rejected: the URL parser would
    /// collapse them and address a different resource.
    pub(crate) fn resource_url(&self, segments: &[&str]) -> Result<Url, Error> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(Error::InvalidSegment {
                segment: (*bad).to_owned(),
            });
        }
        let mut url = self.base_url.clone();
        // Base URL is http(s), checked at construction.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Resolve a caller-supplied path without re-encoding it.
    ///
    /// `/api/tm/...` (the `href` form the appliance returns) resolves
    /// against the origin; anything else against the base path.
    fn relative_url(&self, path: &str) -> Result<Url, Error> {
        if path.starts_with('/') {
            return Ok(self.base_url.join(path)?);
        }
        let mut base = self.base_url.clone();
        let dir = format!("{}/", base.path().trim_end_matches('/'));
        base.set_path(&dir);
        Ok(base.join(path)?)
    }

    /// The API root: base path minus its trailing version segment.
    pub(crate) fn api_root_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop();
        }
        url
    }

    // ── Request primitive ────────────────────────────────────────────

    /// GET `path` and return the parsed JSON body.
    ///
    /// An absolute URL is requested as-is. A rooted path such as a
    /// child's `href` resolves against the appliance origin; anything
    /// else is taken relative to the base path, e.g.
    /// `status/vtm1/statistics`. Existing `%` escapes and query strings
    /// are kept.
    pub async fn fetch(&self, path: &str) -> Result<serde_json::Value, Error> {
        let url = match Url::parse(path) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => self.relative_url(path)?,
            Err(e) => return Err(Error::InvalidUrl(e)),
        };
        self.get(url).await
    }

    /// Send a GET and deserialize a `200 OK` body.
    ///
    /// Any other status becomes [`Error::Api`] carrying the raw body,
    /// which is not parsed.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        trace!(%status, "response received");

        if status != StatusCode::OK {
            let message = resp.text().await.map_err(Error::Transport)?;
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }

    // ── Response shapes ──────────────────────────────────────────────

    /// Names of the named children of the tree node at `segments`.
    ///
    /// Works for any listing, including categories without a dedicated
    /// accessor (`traffic_ips`, `service_protection`, ...).
    pub async fn list_children(&self, segments: &[&str]) -> Result<Vec<String>, Error> {
        self.list_at(self.resource_url(segments)?).await
    }

    /// The `statistics` object of the leaf at `segments`, unmodified.
    pub async fn statistics(&self, segments: &[&str]) -> Result<StatisticsMap, Error> {
        let url = self.resource_url(segments)?;
        let leaf: StatisticsResponse = self.get(url.clone()).await?;
        leaf.statistics.ok_or_else(|| Error::MissingField {
            field: "statistics",
            url: url.to_string(),
        })
    }

    pub(crate) async fn list_at(&self, url: Url) -> Result<Vec<String>, Error> {
        let tree: TreeResponse = self.get(url.clone()).await?;
        tree.into_names().ok_or_else(|| Error::MissingField {
            field: "children",
            url: url.to_string(),
        })
    }
}
