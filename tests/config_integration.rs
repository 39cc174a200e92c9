use a2a_export_demo::{DemoConfig, Error, Timeout};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("A2A_UI_HOST");
        env::remove_var("A2A_UI_PORT");
        env::remove_var("A2A_DEMO_TIMEOUT");
    }
}

fn load(args: &[&str]) -> Result<DemoConfig, Error> {
    DemoConfig::load_from_args(std::iter::once("a2a-export-demo").chain(args.iter().copied()))
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load(&[]).expect("defaults should load");
    assert_eq!(config.base_url, "http://127.0.0.1:12000");
    assert_eq!(config.timeout, Timeout::Bounded(Duration::from_secs(180)));
    assert_eq!(config.text, "export demo ping");
    assert!(!config.mock);
    assert_eq!(config.out_dir, env::current_dir().unwrap());
}

#[test]
#[serial]
fn test_env_host_and_port() {
    clear_env_vars();
    unsafe {
        env::set_var("A2A_UI_HOST", "ui.internal");
        env::set_var("A2A_UI_PORT", "8088");
    }

    let config = load(&[]).expect("Failed to load config");
    assert_eq!(config.base_url, "http://ui.internal:8088");

    clear_env_vars();
}

#[test]
#[serial]
fn test_base_flag_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("A2A_UI_HOST", "ignored");
    }

    let config = load(&["--base", "https://demo.example/ui"]).expect("Failed to load config");
    assert_eq!(config.base_url, "https://demo.example/ui");

    clear_env_vars();
}

#[test]
#[serial]
fn test_timeout_from_env() {
    clear_env_vars();
    unsafe {
        env::set_var("A2A_DEMO_TIMEOUT", " Unlimited ");
    }

    let config = load(&[]).expect("Failed to load config");
    assert_eq!(config.timeout, Timeout::Unbounded);

    // Flag overrides the environment
    let config = load(&["--timeout", "2.5"]).expect("Failed to load config");
    assert_eq!(config.timeout, Timeout::Bounded(Duration::from_millis(2500)));

    clear_env_vars();
}

#[test]
#[serial]
fn test_invalid_timeout_is_config_error() {
    clear_env_vars();

    let err = load(&["--timeout", "bogus"]).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "{err}");

    unsafe {
        env::set_var("A2A_DEMO_TIMEOUT", "soon");
    }
    let err = load(&[]).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "{err}");

    clear_env_vars();
}

#[test]
#[serial]
fn test_remaining_flags() {
    clear_env_vars();

    let config = load(&["--out", "/tmp/exports", "--text", "hi", "--mock"])
        .expect("Failed to load config");
    assert_eq!(config.out_dir, PathBuf::from("/tmp/exports"));
    assert_eq!(config.text, "hi");
    assert!(config.mock);
}

#[test]
#[serial]
fn test_unknown_flag_is_rejected() {
    clear_env_vars();

    let err = load(&["--verbose"]).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "{err}");
}
