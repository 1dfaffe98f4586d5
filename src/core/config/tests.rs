use super::data::Config;
use super::defaults::{RuntimeOverrides, HOSTED_URL_ENV, PROXY_URL_ENV};
use super::io::ConfigError;
use super::keys::{parse_launch_time, KeyError};
use crate::core::backend::{EndpointMode, DEFAULT_PROXY_URL, DEFAULT_TIMEOUT};
use crate::core::completion::SamplingSettings;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_persistence_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.set_key("mode", "hosted").expect("mode");
    config
        .set_key("hosted-url", "https://example.hf.space")
        .expect("hosted-url");
    config.set_key("temperature", "0.4").expect("temperature");
    config
        .set_key("launch-date", "2030-01-02")
        .expect("launch-date");
    config.save_to_path(&config_path).expect("Failed to save config");

    let loaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);
    assert_eq!(loaded.mode, Some(EndpointMode::Hosted));

    let mut loaded = loaded;
    loaded.unset_key("mode").expect("unset mode");
    loaded.save_to_path(&config_path).expect("Failed to save config");

    let reloaded = Config::load_from_path(&config_path).expect("Failed to reload config");
    assert_eq!(reloaded.mode, None);
    assert_eq!(reloaded.temperature, Some(0.4));
}

#[test]
fn parse_errors_name_the_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "mode = [").expect("write");

    let err = Config::load_from_path(&config_path).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse config at"));
}

#[test]
fn unknown_mode_in_file_is_a_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "mode = \"carrier-pigeon\"\n").expect("write");

    assert!(matches!(
        Config::load_from_path(&config_path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn defaults_resolve_to_local_proxy() {
    let endpoint = Config::default().resolve_endpoint_with(&RuntimeOverrides::default(), no_env);

    assert_eq!(endpoint.mode, EndpointMode::Proxy);
    assert_eq!(endpoint.url, DEFAULT_PROXY_URL);
    assert_eq!(endpoint.token_env, "HF_TOKEN");
    assert_eq!(endpoint.timeout, DEFAULT_TIMEOUT);
}

#[test]
fn endpoint_precedence_is_flag_then_env_then_file() {
    let config = Config {
        mode: Some(EndpointMode::Hosted),
        hosted_url: Some("https://file.example".to_string()),
        ..Default::default()
    };

    let env = |name: &str| (name == HOSTED_URL_ENV).then(|| "https://env.example".to_string());

    let from_env = config.resolve_endpoint_with(&RuntimeOverrides::default(), env);
    assert_eq!(from_env.url, "https://env.example");

    let overrides = RuntimeOverrides {
        mode: None,
        endpoint: Some("https://flag.example".to_string()),
    };
    let from_flag = config.resolve_endpoint_with(&overrides, env);
    assert_eq!(from_flag.url, "https://flag.example");

    let from_file = config.resolve_endpoint_with(&RuntimeOverrides::default(), no_env);
    assert_eq!(from_file.url, "https://file.example");
}

#[test]
fn mode_override_switches_which_url_is_used() {
    let config = Config {
        mode: Some(EndpointMode::Hosted),
        proxy_url: Some("http://127.0.0.1:9000/predict".to_string()),
        ..Default::default()
    };
    let overrides = RuntimeOverrides {
        mode: Some(EndpointMode::Proxy),
        endpoint: None,
    };

    let env = |name: &str| (name == HOSTED_URL_ENV).then(|| "https://ignored".to_string());
    let endpoint = config.resolve_endpoint_with(&overrides, env);

    assert_eq!(endpoint.mode, EndpointMode::Proxy);
    assert_eq!(endpoint.url, "http://127.0.0.1:9000/predict");
    assert_ne!(PROXY_URL_ENV, HOSTED_URL_ENV);
}

#[test]
fn sampling_settings_fall_back_per_field() {
    let config = Config {
        max_tokens: Some(512),
        system_prompt: Some("   ".to_string()),
        ..Default::default()
    };

    let settings = config.sampling_settings();
    let defaults = SamplingSettings::default();
    assert_eq!(settings.max_tokens, 512);
    assert_eq!(settings.system_prompt, defaults.system_prompt);
    assert_eq!(settings.temperature, defaults.temperature);
    assert_eq!(settings.top_p, defaults.top_p);
}

#[test]
fn zero_timeout_uses_default() {
    let config = Config {
        timeout: Some(0),
        ..Default::default()
    };
    assert_eq!(config.request_timeout(), DEFAULT_TIMEOUT);

    let config = Config {
        timeout: Some(5),
        ..Default::default()
    };
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
}

#[test]
fn set_key_validates_values() {
    let mut config = Config::default();

    assert!(matches!(
        config.set_key("temperature", "3.5"),
        Err(KeyError::Invalid { .. })
    ));
    assert!(matches!(
        config.set_key("max-tokens", "0"),
        Err(KeyError::Invalid { .. })
    ));
    assert!(matches!(
        config.set_key("proxy-url", "localhost:3001"),
        Err(KeyError::Invalid { .. })
    ));
    assert!(matches!(
        config.set_key("colour", "blue"),
        Err(KeyError::Unknown(_))
    ));
    assert_eq!(config, Config::default());
}

#[test]
fn launch_times_accept_dates_and_timestamps() {
    let midnight = parse_launch_time("2025-05-20").expect("date");
    assert_eq!(midnight.to_string(), "2025-05-20 00:00:00");

    let exact = parse_launch_time("2025-05-20T08:30:00").expect("timestamp");
    assert_eq!(exact.to_string(), "2025-05-20 08:30:00");

    assert!(parse_launch_time("next tuesday").is_none());
}

#[test]
fn countdown_uses_configured_dates() {
    let mut config = Config::default();
    config.set_key("launch-start", "2030-01-01").expect("start");
    config.set_key("launch-date", "2030-01-11").expect("date");

    let countdown = config.countdown();
    let snapshot = countdown.snapshot(parse_launch_time("2030-01-06").expect("now"));
    assert!((snapshot.progress - 50.0).abs() < 1e-9);
}
