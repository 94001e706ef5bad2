mod common;

use std::{env, fs};

use common::{client, ok};
use convertio::ConvertOptions;
use mockito::{Matcher, Server};
use serde_json::json;

// Changes the process working directory, so it lives in its own test binary.
#[test]
fn relative_path_is_uploaded_under_its_base_name() {
    let mut server = Server::new();
    let create = server
        .mock("POST", "/convert")
        .match_body(Matcher::PartialJson(json!({"input": "upload", "filename": "report.docx", "outputformat": "pdf"})))
        .with_body(ok(json!({"id": "abc"})))
        .create();
    let upload = server
        .mock("PUT", "/convert/abc/report.docx")
        .match_body(Matcher::Regex("relative content".to_string()))
        .with_body(ok(json!({})))
        .create();

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("report.docx"), "relative content").unwrap();
    let previous = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let client = client(&server);
    let result = client.convert("./report.docx", "pdf", ConvertOptions::default()).map(|conversion| conversion.id().to_string());
    env::set_current_dir(previous).unwrap();

    assert_eq!(result.unwrap(), "abc");
    create.assert();
    upload.assert();
}
