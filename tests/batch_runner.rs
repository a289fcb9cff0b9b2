/// File-mode batch tests against a mocked lookup service.
use std::io::Write;
use std::time::Duration;

use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wasp::{BatchRunner, Config, FileAccessError, LookupClient};

fn test_runner(base_url: &str) -> BatchRunner {
    let config = Config {
        api_url: format!("{}/fetch-mobile-details", base_url),
        request_timeout: Duration::from_secs(5),
        batch_delay: Duration::from_millis(10),
        ..Config::default()
    };
    let client = LookupClient::new(&config).unwrap();
    BatchRunner::new(client, config.batch_delay)
}

fn file_with(lines: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(lines.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn counts_validation_failures_as_attempts_but_not_processed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fetch-mobile-details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "A"})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let runner = test_runner(&mock_server.uri());
    let file = file_with("9509972790\nnot-a-number\n9509972791\n");

    let (processed, total) = runner.run_file(file.path()).await.unwrap();
    assert_eq!(total, 3);
    assert_eq!(processed, 2);
}

#[tokio::test]
async fn fetch_failures_still_count_as_processed() {
    let mock_server = MockServer::start().await;

    // Every fetch fails, but the sequence runs to completion for each
    // valid line, so all of them count.
    Mock::given(method("GET"))
        .and(path("/fetch-mobile-details"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let runner = test_runner(&mock_server.uri());
    let file = file_with("9509972790\n9509972791\n");

    let (processed, total) = runner.run_file(file.path()).await.unwrap();
    assert_eq!((processed, total), (2, 2));
}

#[tokio::test]
async fn blank_lines_are_skipped_and_values_trimmed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fetch-mobile-details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let runner = test_runner(&mock_server.uri());
    let file = file_with("  9509972790  \n\n   \n9509972791\n");

    let (processed, total) = runner.run_file(file.path()).await.unwrap();
    assert_eq!((processed, total), (2, 2));
}

#[tokio::test]
async fn missing_file_is_fatal_and_makes_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let runner = test_runner(&mock_server.uri());
    let err = runner
        .run_file(std::path::Path::new("/no/such/file.txt"))
        .await
        .unwrap_err();

    match err.downcast_ref::<FileAccessError>() {
        Some(FileAccessError::NotFound(path)) => {
            assert_eq!(path, std::path::Path::new("/no/such/file.txt"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(err.to_string().contains("File not found"));
}

#[tokio::test]
async fn empty_file_reports_and_makes_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let runner = test_runner(&mock_server.uri());
    let file = file_with("\n   \n\n");

    let outcome = runner.run_file(file.path()).await.unwrap();
    assert_eq!(outcome, (0, 0));
}
