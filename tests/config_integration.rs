use medassist_chat::config::{AppConfig, InputMode, SessionIds};
use serial_test::serial;
use std::env;
use std::io::Write;

const BIN: &str = "medassist-chat";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("MEDCHAT_SERVER__PORT");
        env::remove_var("MEDCHAT_API__BASE_URL");
        env::remove_var("MEDCHAT_CHAT__SESSION_IDS");
        env::remove_var("MEDCHAT_CHAT__CREATE_ON_MOUNT");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("API_URL");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("defaults should load");

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.chat.input_mode, InputMode::Chat);
    assert_eq!(config.chat.session_ids, SessionIds::Remote);
    assert!(!config.chat.create_on_mount);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("MEDCHAT_SERVER__PORT", "9090");
        env::set_var("MEDCHAT_CHAT__SESSION_IDS", "placeholder");
        env::set_var("MEDCHAT_CHAT__CREATE_ON_MOUNT", "true");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.chat.session_ids, SessionIds::Placeholder);
    assert!(config.chat.create_on_mount);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    writeln!(
        file,
        "server:\n  port: 7070\napi:\n  base_url: http://api.internal:8000\nchat:\n  input_mode: patient"
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let config =
        AppConfig::load_from_args([BIN, "--config", path.as_str()]).expect("Failed to load config file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.api.base_url, "http://api.internal:8000");
    assert_eq!(config.chat.input_mode, InputMode::Patient);
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "/nonexistent/medchat.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cli_flags_win_over_env() {
    clear_env_vars();
    unsafe {
        env::set_var("MEDCHAT_SERVER__PORT", "9090");
        env::set_var("MEDCHAT_API__BASE_URL", "http://from-env:8000");
    }

    let config = AppConfig::load_from_args([
        BIN,
        "--port",
        "7000",
        "--api-url",
        "http://from-cli:8000",
        "--input-mode",
        "patient",
        "--create-on-mount",
        "true",
    ])
    .expect("Failed to load config");

    assert_eq!(config.server.port, 7000);
    assert_eq!(config.api.base_url, "http://from-cli:8000");
    assert_eq!(config.chat.input_mode, InputMode::Patient);
    assert!(config.chat.create_on_mount);

    clear_env_vars();
}

#[test]
#[serial]
fn test_unknown_flag_is_rejected() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--no-such-flag"]);
    assert!(result.is_err());
}
