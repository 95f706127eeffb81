// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    let err = LogLevel::new(6).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-5, got 6"
    );
}

#[test]
fn test_console_directive_quiets_dependencies() {
    let directives: Vec<_> = (0..=5)
        .map(|n| LogLevel::new(n).unwrap().console_directive())
        .collect();
    insta::assert_debug_snapshot!(directives, @r#"
    [
        "off",
        "error",
        "warn",
        "warn,gitscm=info",
        "warn,gitscm=debug",
        "warn,gitscm=trace",
    ]
    "#);
}

#[test]
fn test_log_level_serde_uses_number() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert_eq!(serde_json::to_string(&LogLevel::TRACE).unwrap(), "5");
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .maybe_with_log_file(Some("out/gitscm.log".to_string()))
        .with_ansi(false)
        .build();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.log_file(), Some("out/gitscm.log"));
    assert!(!config.ansi());
}
