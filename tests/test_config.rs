use std::path::PathBuf;

use clap::Parser;
use minnow::config::{Cli, Config, PathPolicy};
use tokio::sync::Semaphore;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.server.port, 80);
    assert_eq!(cfg.server.max_connections, 10_000);
    assert_eq!(cfg.server.listen_addr(), "0.0.0.0:80");
    assert_eq!(cfg.static_files.root, PathBuf::from("./static"));
    assert_eq!(cfg.static_files.path_policy, PathPolicy::Contained);
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml_str(
        r#"
server:
  host: 127.0.0.1
  port: 8080
  max_connections: 64
static_files:
  root: /srv/www
  path_policy: raw
"#,
    )
    .unwrap();

    assert_eq!(cfg.server.listen_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.server.max_connections, 64);
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.static_files.path_policy, PathPolicy::Raw);
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml_str("server:\n  port: 9000\n").unwrap();

    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.static_files.root, PathBuf::from("./static"));
}

#[test]
fn test_config_rejects_unknown_policy() {
    assert!(Config::from_yaml_str("static_files:\n  path_policy: open\n").is_err());
}

#[test]
fn test_config_rejects_zero_max_connections() {
    let err = Config::from_yaml_str("server:\n  max_connections: 0\n").unwrap_err();
    assert!(err.to_string().contains("max_connections"));
}

#[test]
fn test_config_rejects_max_connections_above_semaphore_limit() {
    let yaml = format!("server:\n  max_connections: {}\n", Semaphore::MAX_PERMITS + 1);
    assert!(Config::from_yaml_str(&yaml).is_err());

    let yaml = "server: {host: 127.0.0.1, port: 0, max_connections: 18446744073709551615}";
    assert!(Config::from_yaml_str(yaml).is_err());
}

#[test]
fn test_config_accepts_max_connections_bounds() {
    let yaml = format!("server:\n  max_connections: {}\n", Semaphore::MAX_PERMITS);
    assert_eq!(Config::from_yaml_str(&yaml).unwrap().server.max_connections, Semaphore::MAX_PERMITS);
    assert_eq!(Config::from_yaml_str("server:\n  max_connections: 1\n").unwrap().server.max_connections, 1);
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_config_from_missing_file() {
    let err = Config::from_file(std::path::Path::new("/nonexistent/minnow.yaml")).unwrap_err();
    assert!(err.to_string().contains("reading config file"));
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minnow.yaml");
    std::fs::write(&path, "server:\n  port: 8081\n").unwrap();

    let cfg = Config::from_file(&path).unwrap();
    assert_eq!(cfg.server.port, 8081);
}

#[test]
fn test_cli_port_flag() {
    let cli = Cli::try_parse_from(["minnow", "-p", "8080"]).unwrap();
    assert_eq!(cli.port, Some(8080));

    let mut cfg = Config::default();
    cfg.apply_cli(&cli);
    assert_eq!(cfg.server.port, 8080);
}

#[test]
fn test_cli_without_flags_keeps_port() {
    let cli = Cli::try_parse_from(["minnow"]).unwrap();
    assert_eq!(cli.port, None);

    let mut cfg = Config::default();
    cfg.apply_cli(&cli);
    assert_eq!(cfg.server.port, 80);
}

#[test]
fn test_cli_rejects_other_flags() {
    assert!(Cli::try_parse_from(["minnow", "-x"]).is_err());
    assert!(Cli::try_parse_from(["minnow", "--port", "80"]).is_err());
}

#[test]
fn test_cli_has_no_help_or_version_flags() {
    for flag in ["-h", "--help", "-V", "--version"] {
        assert!(Cli::try_parse_from(["minnow", flag]).is_err(), "{}", flag);
    }
}

#[test]
fn test_cli_rejects_bad_port() {
    assert!(Cli::try_parse_from(["minnow", "-p", "http"]).is_err());
    assert!(Cli::try_parse_from(["minnow", "-p", "70000"]).is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr(), cfg2.server.listen_addr());
}
