use super::*;

#[test]
fn from_values_defaults_when_nothing_set() {
    let cfg = ConsoleConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ConsoleConfig::default());
    assert_eq!(cfg.token_storage_key, DEFAULT_TOKEN_STORAGE_KEY);
    assert_eq!(cfg.signin_path, "/signin");
    assert_eq!(cfg.inactivity_timeout, Duration::from_secs(900));
}

#[test]
fn from_values_trims_trailing_slash_on_base_url() {
    let cfg = ConsoleConfig::from_values(Some("https://api.torneo.test/"), None).unwrap();
    assert_eq!(cfg.api_base_url, "https://api.torneo.test");
}

#[test]
fn default_base_url_is_same_origin() {
    assert_eq!(ConsoleConfig::default().api_base_url, "");
}

#[test]
fn from_values_parses_timeout_override() {
    let cfg = ConsoleConfig::from_values(None, Some(" 120 ")).unwrap();
    assert_eq!(cfg.inactivity_timeout, Duration::from_secs(120));
}

#[test]
fn from_values_rejects_zero_timeout() {
    assert_eq!(
        ConsoleConfig::from_values(None, Some("0")),
        Err(ConfigError::InvalidTimeout("0".to_owned()))
    );
}

#[test]
fn from_values_rejects_non_numeric_timeout() {
    let err = ConsoleConfig::from_values(None, Some("15m")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTimeout("15m".to_owned()));
    assert!(err.to_string().contains("TORNEO_IDLE_TIMEOUT_SECS"));
}
