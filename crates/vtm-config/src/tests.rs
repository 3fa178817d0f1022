#![allow(clippy::unwrap_used)]

use std::time::Duration;

use pretty_assertions::assert_eq;
use secrecy::ExposeSecret;
use vtm_api::TlsMode;

use super::*;

const SAMPLE: &str = r#"
default_profile = "lab"

[defaults]
timeout = 10

[profiles.lab]
host = "https://vtm-lab.example.com"
username = "monitor"
password = "s3cret"

[profiles.prod]
host = "https://vtm1.example.com"
port = 8443
api_version = "5.2"
username = "monitor"
password = "s3cret"
ca_cert = "/etc/vtm/ca.pem"
timeout = 5
"#;

fn sample_config() -> Config {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, SAMPLE).unwrap();
    load_config_from(&path).unwrap()
}

#[test]
fn loads_profiles_and_defaults() {
    let cfg = sample_config();
    assert_eq!(cfg.default_profile.as_deref(), Some("lab"));
    assert_eq!(cfg.defaults.timeout, 10);
    assert!(!cfg.defaults.verify_tls);
    assert_eq!(cfg.profiles.len(), 2);
    assert_eq!(cfg.profiles["prod"].port, Some(8443));
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg.default_profile.as_deref(), Some("default"));
    assert_eq!(cfg.defaults.timeout, 30);
    assert!(cfg.profiles.is_empty());
}

#[test]
fn active_profile_uses_default_profile() {
    let cfg = sample_config();
    let (name, profile) = cfg.active_profile().unwrap();
    assert_eq!(name, "lab");
    assert_eq!(profile.host, "https://vtm-lab.example.com");
}

#[test]
fn unknown_profile_is_reported() {
    let cfg = sample_config();
    let err = cfg.profile("staging").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownProfile { ref profile } if profile == "staging"));
}

#[test]
fn profile_without_overrides_gets_client_defaults() {
    let cfg = sample_config();
    let client = cfg.client_config("lab").unwrap();
    assert_eq!(
        client.base_path(),
        "https://vtm-lab.example.com:9070/api/tm/3.4"
    );
    assert_eq!(client.transport.tls, TlsMode::DangerAcceptInvalid);
    assert_eq!(client.transport.timeout, Duration::from_secs(10));
    assert_eq!(client.credentials.username, "monitor");
}

#[test]
fn profile_overrides_port_version_tls_and_timeout() {
    let cfg = sample_config();
    let client = cfg.client_config("prod").unwrap();
    assert_eq!(client.base_path(), "https://vtm1.example.com:8443/api/tm/5.2");
    assert_eq!(
        client.transport.tls,
        TlsMode::CustomCa(PathBuf::from("/etc/vtm/ca.pem"))
    );
    assert_eq!(client.transport.timeout, Duration::from_secs(5));
}

#[test]
fn verify_tls_override_selects_system_roots() {
    let profile = Profile {
        host: "https://vtm1.example.com".into(),
        username: Some("monitor".into()),
        password: Some("pw".into()),
        verify_tls: Some(true),
        ..Profile::default()
    };
    let client = profile_to_client_config(&profile, "p", &Defaults::default()).unwrap();
    assert_eq!(client.transport.tls, TlsMode::System);
}

#[test]
fn host_without_scheme_is_rejected() {
    let profile = Profile {
        host: "vtm1.example.com".into(),
        username: Some("monitor".into()),
        password: Some("pw".into()),
        ..Profile::default()
    };
    let err = profile_to_client_config(&profile, "p", &Defaults::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "host"));
}

fn lab_profile() -> Profile {
    Profile {
        host: "https://vtm1.example.com".into(),
        username: Some("monitor".into()),
        password: Some("plain".into()),
        password_env: Some("VTM_LAB_PASSWORD".into()),
        ..Profile::default()
    }
}

fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn password_env_wins_over_everything() {
    let env = env_of(&[
        ("VTM_LAB_PASSWORD", "from-profile-env"),
        (PASSWORD_ENV, "from-global"),
    ]);
    let creds = resolve_credentials_with(&lab_profile(), "lab", env).unwrap();
    assert_eq!(creds.username, "monitor");
    assert_eq!(creds.password.expose_secret(), "from-profile-env");
}

#[test]
fn global_password_env_beats_plaintext() {
    let env = env_of(&[(PASSWORD_ENV, "from-global")]);
    let creds = resolve_credentials_with(&lab_profile(), "lab", env).unwrap();
    assert_eq!(creds.password.expose_secret(), "from-global");
}

#[test]
fn plaintext_password_is_last_resort() {
    let creds = resolve_credentials_with(&lab_profile(), "lab", env_of(&[])).unwrap();
    assert_eq!(creds.username, "monitor");
    assert_eq!(creds.password.expose_secret(), "plain");
}

#[test]
fn username_falls_back_to_env() {
    let profile = Profile {
        username: None,
        ..lab_profile()
    };
    let env = env_of(&[(USERNAME_ENV, "ops")]);
    let creds = resolve_credentials_with(&profile, "lab", env).unwrap();
    assert_eq!(creds.username, "ops");
}

#[test]
fn no_username_and_no_password_is_no_credentials() {
    let profile = Profile {
        host: "https://vtm1.example.com".into(),
        ..Profile::default()
    };
    let err = resolve_credentials_with(&profile, "bare", env_of(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::NoCredentials { ref profile } if profile == "bare"));
}

#[test]
fn username_without_password_is_no_credentials() {
    let profile = Profile {
        host: "https://vtm1.example.com".into(),
        username: Some("monitor".into()),
        ..Profile::default()
    };
    let err = resolve_credentials_with(&profile, "half", env_of(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::NoCredentials { .. }));
}

#[test]
fn save_then_load_keeps_profiles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config::default();
    cfg.profiles.insert(
        "default".into(),
        Profile {
            host: "https://vtm1.example.com".into(),
            port: Some(9071),
            ..Profile::default()
        },
    );
    save_config_to(&cfg, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.profiles["default"].port, Some(9071));
    assert_eq!(loaded.profiles["default"].host, "https://vtm1.example.com");
}
