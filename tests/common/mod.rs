#![allow(dead_code)]

use std::time::Duration;

use convertio::{Client, ClientSettings};
use mockito::{Mock, Server};
use serde_json::{json, Value};

pub const API_KEY: &str = "test-key";

pub fn client(server: &Server) -> Client {
    client_with_interval(server, Duration::from_millis(20))
}

pub fn client_with_interval(server: &Server, poll_interval: Duration) -> Client {
    let settings = ClientSettings::new(API_KEY).with_host(server.url()).with_poll_interval(poll_interval);
    Client::build(settings).unwrap()
}

pub fn ok(data: Value) -> String {
    json!({"code": 200, "status": "ok", "data": data}).to_string()
}

pub fn error(message: &str) -> String {
    json!({"code": 422, "status": "error", "error": message}).to_string()
}

pub fn status_mock(server: &mut Server, id: &str, data: Value) -> Mock {
    server
        .mock("GET", format!("/convert/{}/status", id).as_str())
        .with_header("content-type", "application/json")
        .with_body(ok(data))
}
