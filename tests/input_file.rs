//! Tests for reading the domain list from a file.

mod helpers;

use std::path::PathBuf;
use std::sync::Arc;

use domain_axfr::{dispatch, open_domain_input, run_axfr, Config};
use tempfile::TempDir;

use helpers::{a, context, FakeExchange, FakeTransfer};

#[tokio::test]
async fn test_file_input_skips_blank_and_comment_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input_file = temp_dir.path().join("domains.txt");
    std::fs::write(
        &input_file,
        "# lab zones\nexample.com\n\n   \nexample.org\r\n",
    )
    .expect("Failed to write test file");

    let exchange = FakeExchange::default()
        .ns("example.com.", &["ns.example.com."])
        .ns("example.org.", &["ns.example.org."]);
    let transfer = Arc::new(
        FakeTransfer::default()
            .zone(
                "example.com",
                "ns.example.com.",
                vec![vec![a("www.example.com.", [192, 0, 2, 1])]],
            )
            .zone(
                "example.org",
                "ns.example.org.",
                vec![vec![a("www.example.org.", [192, 0, 2, 2])]],
            ),
    );
    let (ctx, sink) = context(exchange, transfer.clone());

    let config = Config {
        file: input_file,
        ..Default::default()
    };
    let input = open_domain_input(&config).await.expect("Should open input");
    let report = dispatch(input, ctx, 1).await;

    assert_eq!(report.domains, 2);
    // One worker processes domains in input order.
    assert_eq!(sink.lines(), vec!["www.example.com", "www.example.org"]);
    assert_eq!(transfer.attempts.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_missing_input_file_is_an_error() {
    let config = Config {
        file: PathBuf::from("/nonexistent/domains.txt"),
        ..Default::default()
    };
    let err = run_axfr(config).await.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to open"));
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_reading_input() {
    let config = Config {
        file: PathBuf::from("/nonexistent/domains.txt"),
        threads: 0,
        ..Default::default()
    };
    let err = run_axfr(config).await.unwrap_err();
    assert!(err.to_string().contains("Configuration validation failed"));
}
