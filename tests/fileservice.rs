mod common;

use avialb::{ApiOptions, AviSession};
use common::{empty_response, json_response, login_response, serve_script};
use std::time::Duration;

fn session(base_url: &str) -> AviSession {
    AviSession::builder(base_url, "admin")
        .expect("builder")
        .password("hunter2")
        .api_retry_interval(Duration::from_millis(10))
        .disable_controller_status_check(true)
        .build()
        .expect("build")
}

fn scratch_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("avialb-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("scratch dir");
    dir.join(name)
}

#[tokio::test]
async fn upload_sends_a_multipart_form_with_the_controller_uri() {
    let (base_url, mut rx) = serve_script(vec![
        login_response(),
        empty_response("201 Created"),
    ])
    .await;
    let session = session(&base_url);

    let local = scratch_path("hsmpackage.tar");
    tokio::fs::write(&local, b"package-bytes").await.expect("scratch file");

    session
        .upload_file(&local, "uploads/hsmpackages?hsmtype=safenet", &ApiOptions::default())
        .await
        .expect("upload");
    tokio::fs::remove_file(&local).await.expect("cleanup");

    rx.recv().await.expect("login request");
    let upload = rx.recv().await.expect("upload request");
    assert_eq!(upload.method, "POST");
    assert_eq!(upload.path, "/api/fileservice/uploads/hsmpackages");
    assert_eq!(upload.query_value("hsmtype"), Some("safenet"));
    let content_type = upload.header_value("Content-Type").expect("content type");
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&upload.body).into_owned();
    assert!(body.contains("package-bytes"));
    assert!(body.contains("controller://uploads/hsmpackages"));
    assert!(body.contains("filename=\"hsmpackage.tar\""));
}

#[tokio::test]
async fn download_streams_the_body_into_the_local_file() {
    let (base_url, mut rx) = serve_script(vec![
        login_response(),
        json_response("200 OK", "log line 1\nlog line 2\n"),
    ])
    .await;
    let session = session(&base_url);

    let local = scratch_path("debuglogs.txt");
    session
        .download_file("techsupport/debuglogs", &local, &ApiOptions::default())
        .await
        .expect("download");

    let contents = tokio::fs::read_to_string(&local).await.expect("read back");
    assert_eq!(contents, "log line 1\nlog line 2\n");
    tokio::fs::remove_file(&local).await.expect("cleanup");

    rx.recv().await.expect("login request");
    let download = rx.recv().await.expect("download request");
    assert_eq!(download.method, "GET");
    assert_eq!(download.path, "/api/fileservice/techsupport/debuglogs");
}
