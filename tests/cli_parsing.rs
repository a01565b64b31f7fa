//! Tests for command-line parsing.

use clap::Parser;
use domain_axfr::{Config, LogFormat};
use std::net::IpAddr;
use std::path::PathBuf;

#[test]
fn test_cli_defaults() {
    let config = Config::try_parse_from(["domain_axfr"]).expect("Should parse without arguments");
    assert_eq!(config.file, PathBuf::from("-"));
    assert_eq!(config.nameserver, "8.8.8.8".parse::<IpAddr>().unwrap());
    assert_eq!(config.threads, 8);
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Info
    );
    assert!(matches!(config.log_format, LogFormat::Plain));
}

#[test]
fn test_cli_short_and_long_flags() {
    let config = Config::try_parse_from([
        "domain_axfr",
        "domains.txt",
        "--ns",
        "1.1.1.1",
        "-t",
        "32",
        "--timeout-seconds",
        "3",
        "--log-level",
        "warn",
        "--log-format",
        "json",
    ])
    .expect("Should parse all flags");

    assert_eq!(config.file, PathBuf::from("domains.txt"));
    assert_eq!(config.nameserver, "1.1.1.1".parse::<IpAddr>().unwrap());
    assert_eq!(config.threads, 32);
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Warn
    );
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_cli_long_threads_flag() {
    let config = Config::try_parse_from(["domain_axfr", "--threads", "2"]).unwrap();
    assert_eq!(config.threads, 2);
}

#[test]
fn test_cli_ipv6_nameserver() {
    let config = Config::try_parse_from(["domain_axfr", "--ns", "2001:4860:4860::8888"]).unwrap();
    assert!(config.nameserver.is_ipv6());
}

#[test]
fn test_cli_rejects_hostname_nameserver() {
    let result = Config::try_parse_from(["domain_axfr", "--ns", "dns.google"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_non_numeric_threads() {
    let result = Config::try_parse_from(["domain_axfr", "-t", "many"]);
    assert!(result.is_err());
}

#[test]
fn test_zero_threads_parses_but_fails_validation() {
    let config = Config::try_parse_from(["domain_axfr", "-t", "0"]).unwrap();
    assert!(config.validate().is_err());
}
