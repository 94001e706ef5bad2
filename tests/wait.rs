mod common;

use std::time::{Duration, Instant};

use common::{client, client_with_interval, status_mock};
use convertio::ConvertioError;
use mockito::Server;
use serde_json::json;

#[test]
fn finished_job_returns_without_sleeping() {
    let mut server = Server::new();
    let status = status_mock(&mut server, "abc", json!({"step": "finish"})).expect(1).create();

    let client = client_with_interval(&server, Duration::from_secs(5));
    let start = Instant::now();
    client.conversion("abc").wait(None).unwrap();
    assert!(start.elapsed() < Duration::from_secs(5));

    status.assert();
}

#[test]
fn unfinished_job_times_out_after_retrying() {
    let mut server = Server::new();
    let status = status_mock(&mut server, "abc", json!({"step": "convert"})).expect_at_least(2).create();

    let client = client(&server);
    let timeout = Duration::from_millis(100);
    match client.wait("abc", Some(timeout)) {
        Err(ConvertioError::Timeout { id, waited }) => {
            assert_eq!(id, "abc");
            assert!(waited >= timeout);
        }
        other => panic!("expected timeout, got {:?}", other),
    }

    status.assert();
}

#[test]
fn zero_timeout_still_polls_twice() {
    let mut server = Server::new();
    let status = status_mock(&mut server, "abc", json!({"step": "wait"})).expect(2).create();

    let result = client(&server).wait("abc", Some(Duration::ZERO));
    assert!(matches!(result, Err(ConvertioError::Timeout { .. })));

    status.assert();
}

#[test]
fn failed_step_is_not_terminal() {
    let mut server = Server::new();
    let status = status_mock(&mut server, "abc", json!({"step": "failed"})).expect_at_least(2).create();

    let result = client(&server).wait("abc", Some(Duration::from_millis(50)));
    assert!(matches!(result, Err(ConvertioError::Timeout { .. })));

    status.assert();
}
