//! Profile configuration for `vtm-api` clients.
//!
//! TOML profiles, credential resolution (env + plaintext), and
//! translation to `vtm_api::ClientConfig`. The API client never reads
//! files or the environment itself; callers that want a config file go
//! through this crate.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use vtm_api::{ClientConfig, Credentials, DEFAULT_API_VERSION, DEFAULT_PORT};

/// Environment variable consulted for the username when a profile has none.
pub const USERNAME_ENV: &str = "VTM_USERNAME";

/// Environment variable consulted for the password.
pub const PASSWORD_ENV: &str = "VTM_PASSWORD";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no profile named '{profile}'")]
    UnknownProfile { profile: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named.
    pub default_profile: Option<String>,

    /// Values applied to every profile unless it overrides them.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named appliance profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Result<&Profile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile {
                profile: name.into(),
            })
    }

    /// The `default_profile` entry, falling back to `"default"`.
    pub fn active_profile(&self) -> Result<(&str, &Profile), ConfigError> {
        let name = self.default_profile.as_deref().unwrap_or("default");
        Ok((name, self.profile(name)?))
    }

    /// Resolve a named profile all the way to a `ClientConfig`.
    pub fn client_config(&self, name: &str) -> Result<ClientConfig, ConfigError> {
        profile_to_client_config(self.profile(name)?, name, &self.defaults)
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    /// Appliances ship with self-signed certificates, so this is off
    /// unless turned on.
    #[serde(default)]
    pub verify_tls: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            verify_tls: false,
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// A named appliance profile.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Appliance URL including scheme (e.g., "https://vtm1.example.com").
    pub host: String,

    /// Management port, 9070 if unset.
    pub port: Option<u16>,

    /// REST API version, "3.4" if unset.
    pub api_version: Option<String>,

    pub username: Option<String>,

    /// Password (plaintext, prefer `password_env`).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Override `defaults.verify_tls`.
    pub verify_tls: Option<bool>,

    /// Path to a PEM CA bundle. Implies verification.
    pub ca_cert: Option<PathBuf>,

    /// Override `defaults.timeout`.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "vtm", "vtm").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("vtm");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load Config from `path` layered over defaults, then `VTM_*` env vars.
///
/// A missing file is not an error; defaults and env still apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("VTM_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if it can't be read.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve username + password for a profile from the process environment.
///
/// Username: profile, then `VTM_USERNAME`.
/// Password: the profile's `password_env` variable, then `VTM_PASSWORD`,
/// then plaintext in the profile.
pub fn resolve_credentials(
    profile: &Profile,
    profile_name: &str,
) -> Result<Credentials, ConfigError> {
    resolve_credentials_with(profile, profile_name, |name| std::env::var(name).ok())
}

/// [`resolve_credentials`] with an explicit variable lookup.
pub fn resolve_credentials_with(
    profile: &Profile,
    profile_name: &str,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Credentials, ConfigError> {
    let no_credentials = || ConfigError::NoCredentials {
        profile: profile_name.into(),
    };

    let username = profile
        .username
        .clone()
        .or_else(|| env(USERNAME_ENV))
        .ok_or_else(no_credentials)?;

    let password = profile
        .password_env
        .as_deref()
        .and_then(&env)
        .or_else(|| env(PASSWORD_ENV))
        .or_else(|| profile.password.clone())
        .ok_or_else(no_credentials)?;

    Ok(Credentials::new(username, SecretString::from(password)))
}

/// Build a `ClientConfig` from a profile and the global defaults.
pub fn profile_to_client_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ClientConfig, ConfigError> {
    let host = profile.host.trim();
    if !(host.starts_with("https://") || host.starts_with("http://")) {
        return Err(ConfigError::Validation {
            field: "host".into(),
            reason: format!("expected an http:// or https:// URL, got '{host}'"),
        });
    }

    let credentials = resolve_credentials(profile, profile_name)?;

    let mut config = ClientConfig::new(host, credentials)
        .with_port(profile.port.unwrap_or(DEFAULT_PORT))
        .with_api_version(
            profile
                .api_version
                .clone()
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_owned()),
        )
        .with_timeout(Duration::from_secs(
            profile.timeout.unwrap_or(defaults.timeout),
        ));

    config = if let Some(ref ca_path) = profile.ca_cert {
        config.with_ca_cert(ca_path.clone())
    } else {
        config.with_tls_verification(profile.verify_tls.unwrap_or(defaults.verify_tls))
    };

    Ok(config)
}

#[cfg(test)]
mod tests;
