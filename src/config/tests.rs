use super::{AppConfig, MAX_DISPLAY_DIMENSION, MAX_RENDERER_ARGS};
use clap::Parser;

#[test]
fn defaults_to_deck_sized_display() {
    let mut cfg = AppConfig::parse_from(["test-app"]);
    assert!(cfg.validate().is_ok());
    assert_eq!((cfg.display_width, cfg.display_height), (1280, 800));
    assert!(cfg.logging_enabled());
}

#[test]
fn launch_flags_parse_from_cli() {
    let cfg = AppConfig::parse_from([
        "test-app",
        "--overlay",
        "--steam-ui",
        "--native-resolution",
    ]);
    assert!(cfg.overlay);
    assert!(cfg.steam_ui);
    assert!(cfg.native_resolution);
}

#[test]
fn rejects_display_dimensions_out_of_bounds() {
    let mut cfg = AppConfig::parse_from(["test-app", "--display-width", "0"]);
    assert!(cfg.validate().is_err());

    let too_tall = (MAX_DISPLAY_DIMENSION + 1).to_string();
    let mut cfg = AppConfig::parse_from(["test-app", "--display-height", too_tall.as_str()]);
    assert!(cfg.validate().is_err());
}

#[test]
fn accepts_display_dimension_bounds() {
    let max = MAX_DISPLAY_DIMENSION.to_string();
    let mut cfg = AppConfig::parse_from([
        "test-app",
        "--display-width",
        "1",
        "--display-height",
        max.as_str(),
    ]);
    assert!(cfg.validate().is_ok());
}

#[test]
fn renderer_cmd_is_trimmed() {
    let mut cfg = AppConfig::parse_from(["test-app", "--renderer-cmd", "  hhd-ui  "]);
    cfg.validate().expect("valid renderer");
    assert_eq!(cfg.renderer_cmd.as_deref(), Some("hhd-ui"));
}

#[test]
fn rejects_blank_or_control_renderer_cmd() {
    let mut cfg = AppConfig::parse_from(["test-app", "--renderer-cmd", "   "]);
    assert!(cfg.validate().is_err());

    let mut cfg = AppConfig::parse_from(["test-app", "--renderer-cmd", "hhd-ui\nrm"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_too_many_renderer_args() {
    let mut args = vec!["test-app".to_string(), "--renderer-cmd".to_string(), "ui".to_string()];
    for i in 0..=MAX_RENDERER_ARGS {
        args.push("--renderer-arg".to_string());
        args.push(format!("a{i}"));
    }
    let mut cfg = AppConfig::parse_from(args);
    assert!(cfg.validate().is_err());
}

#[test]
fn renderer_args_need_a_renderer() {
    let mut cfg = AppConfig::parse_from(["test-app", "--renderer-arg", "--no-sandbox"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn no_logs_overrides_logs() {
    let cfg = AppConfig::parse_from(["test-app", "--logs", "--no-logs"]);
    assert!(!cfg.logging_enabled());
}
