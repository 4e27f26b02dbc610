mod common;

use avialb::{ApiOptions, AviSession, Error, PatchOp};
use common::{empty_response, json_response, login_response, serve_once, serve_script};
use serde_json::json;
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

#[tokio::test]
async fn login_sends_credentials_and_adopts_session_cookies() {
    let (base_url, mut rx) = serve_script(vec![
        login_response(),
        json_response("200 OK", r#"{"name":"admin"}"#),
    ])
    .await;
    let session = session(&base_url);

    let tenant: serde_json::Value = session.get("api/tenant/admin").await.expect("get");
    assert_eq!(tenant["name"], "admin");

    let login = rx.recv().await.expect("login request");
    assert_eq!(login.method, "POST");
    assert_eq!(login.path, "/login");
    assert_eq!(
        login.json_body(),
        json!({"username": "admin", "password": "hunter2"})
    );
    assert_eq!(login.header_value("X-Avi-Version"), Some("18.2.6"));
    assert_eq!(login.header_value("X-Avi-Tenant"), Some("admin"));
    assert_eq!(
        login.header_value("Referer"),
        Some(format!("{base_url}/").as_str())
    );
    assert!(login.header_value("Cookie").is_none());
    assert!(login.header_value("X-CSRFToken").is_none());

    let get = rx.recv().await.expect("get request");
    assert_eq!(get.method, "GET");
    assert_eq!(get.path, "/api/tenant/admin");
    assert_eq!(get.header_value("X-CSRFToken"), Some("csrf-abc"));
    let cookie = get.header_value("Cookie").expect("session cookie");
    assert!(cookie.contains("csrftoken=csrf-abc"));
    assert!(cookie.contains("sessionid=sess-123"));
    assert!(cookie.contains("avi-sessionid=sess-123"));
}

#[tokio::test]
async fn tenant_and_version_overrides_reach_the_wire() {
    let (base_url, mut rx) =
        serve_script(vec![login_response(), json_response("200 OK", "{}")]).await;
    let session = AviSession::builder(&base_url, "admin")
        .expect("builder")
        .password("hunter2")
        .version("30.2.1")
        .tenant("marketing")
        .disable_controller_status_check(true)
        .build()
        .expect("build");

    let options = ApiOptions::new().tenant("finance");
    let _: serde_json::Value = session
        .get_with_options("api/pool", &options)
        .await
        .expect("get");

    let login = rx.recv().await.expect("login request");
    assert_eq!(login.header_value("X-Avi-Tenant"), Some("marketing"));
    assert_eq!(login.header_value("X-Avi-Version"), Some("30.2.1"));

    let get = rx.recv().await.expect("get request");
    assert_eq!(get.header_value("X-Avi-Tenant"), Some("finance"));
    assert_eq!(get.header_value("X-Avi-Version"), Some("30.2.1"));
}

#[tokio::test]
async fn relogs_in_and_retries_after_401() {
    let (base_url, mut rx) = serve_script(vec![
        login_response(),
        empty_response("401 Unauthorized"),
        login_response(),
        json_response("200 OK", r#"{"name":"t1"}"#),
    ])
    .await;
    let session = session(&base_url);

    let tenant: serde_json::Value = session.get("api/tenant/t1").await.expect("get");
    assert_eq!(tenant["name"], "t1");

    let sequence: Vec<(String, String)> = [
        rx.recv().await.expect("request"),
        rx.recv().await.expect("request"),
        rx.recv().await.expect("request"),
        rx.recv().await.expect("request"),
    ]
    .into_iter()
    .map(|req| (req.method, req.path))
    .collect();
    assert_eq!(
        sequence,
        vec![
            ("POST".to_string(), "/login".to_string()),
            ("GET".to_string(), "/api/tenant/t1".to_string()),
            ("POST".to_string(), "/login".to_string()),
            ("GET".to_string(), "/api/tenant/t1".to_string()),
        ]
    );
}

#[tokio::test]
async fn retries_5xx_without_a_fresh_login() {
    let (base_url, mut rx) = serve_script(vec![
        login_response(),
        empty_response("503 Service Unavailable"),
        json_response("200 OK", r#"{"name":"t1"}"#),
    ])
    .await;
    let session = session(&base_url);

    let _: serde_json::Value = session.get("api/tenant/t1").await.expect("get");

    assert_eq!(rx.recv().await.expect("request").path, "/login");
    assert_eq!(rx.recv().await.expect("request").path, "/api/tenant/t1");
    let retry = rx.recv().await.expect("request");
    assert_eq!(retry.method, "GET");
    assert_eq!(retry.path, "/api/tenant/t1");
}

#[tokio::test]
async fn gives_up_after_the_retry_budget() {
    let (base_url, mut rx) = serve_script(vec![
        login_response(),
        empty_response("503 Service Unavailable"),
        empty_response("503 Service Unavailable"),
    ])
    .await;
    let session = AviSession::builder(&base_url, "admin")
        .expect("builder")
        .password("hunter2")
        .max_api_retries(2)
        .api_retry_interval(Duration::from_millis(10))
        .disable_controller_status_check(true)
        .build()
        .expect("build");

    let result: Result<serde_json::Value, Error> = session.get("api/tenant/t1").await;
    let err = result.expect_err("retries should be exhausted");
    assert_eq!(err.status(), Some(503));

    drop(rx);
}

#[tokio::test]
async fn login_failure_surfaces_the_controller_detail() {
    let (base_url, mut rx) = serve_once(json_response(
        "401 Unauthorized",
        r#"{"error":"Invalid credentials"}"#,
    ))
    .await;

    let result = AviSession::builder(&base_url, "admin")
        .expect("builder")
        .password("wrong")
        .disable_controller_status_check(true)
        .connect()
        .await;
    match result {
        Err(Error::Api(api)) => {
            assert_eq!(api.status, 401);
            assert_eq!(api.detail.detail(), Some("Invalid credentials"));
        }
        other => panic!("expected api error, got {:?}", other.err()),
    }

    let login = rx.recv().await.expect("login request");
    assert_eq!(login.path, "/login");
}

#[tokio::test]
async fn patch_wraps_the_payload_under_the_op_key() {
    let (base_url, mut rx) = serve_script(vec![
        login_response(),
        json_response("200 OK", r#"{"name":"pool-1"}"#),
    ])
    .await;
    let session = session(&base_url);

    let patched: Option<serde_json::Value> = session
        .patch(
            "api/pool/pool-1",
            PatchOp::Replace,
            &json!({"default_server_port": 8080}),
        )
        .await
        .expect("patch");
    assert_eq!(patched.expect("body")["name"], "pool-1");

    rx.recv().await.expect("login request");
    let patch = rx.recv().await.expect("patch request");
    assert_eq!(patch.method, "PATCH");
    assert_eq!(patch.path, "/api/pool/pool-1");
    assert_eq!(
        patch.json_body(),
        json!({"replace": {"default_server_port": 8080}})
    );
}

#[tokio::test]
async fn collection_envelope_is_unwrapped() {
    let body = r#"{"count":2,"results":[{"name":"p1"},{"name":"p2"}],"next":null}"#;
    let (base_url, mut rx) =
        serve_script(vec![login_response(), json_response("200 OK", body)]).await;
    let session = session(&base_url);

    let options = ApiOptions::new().param("page_size", "100");
    let pools: Vec<serde_json::Value> = session
        .get_collection("api/pool", &options)
        .await
        .expect("collection");
    assert_eq!(pools.len(), 2);
    assert_eq!(pools[0]["name"], "p1");

    rx.recv().await.expect("login request");
    let get = rx.recv().await.expect("get request");
    assert_eq!(get.path, "/api/pool");
    assert_eq!(get.query_value("page_size"), Some("100"));
}

#[tokio::test]
async fn object_lookup_builds_the_filter_query() {
    let body = r#"{"count":1,"results":[{"name":"web-vs","uuid":"virtualservice-1"}]}"#;
    let (base_url, mut rx) =
        serve_script(vec![login_response(), json_response("200 OK", body)]).await;
    let session = session(&base_url);

    let options = ApiOptions::new().cloud("Default-Cloud").include_name(true);
    let vs: serde_json::Value = session
        .get_object_by_name("virtualservice", "web-vs", &options)
        .await
        .expect("lookup");
    assert_eq!(vs["uuid"], "virtualservice-1");

    rx.recv().await.expect("login request");
    let get = rx.recv().await.expect("lookup request");
    assert_eq!(get.path, "/api/virtualservice");
    assert_eq!(get.query_value("name"), Some("web-vs"));
    assert_eq!(get.query_value("cloud"), Some("Default-Cloud"));
    assert_eq!(get.query_value("include_name"), Some("true"));
}

#[tokio::test]
async fn object_lookup_rejects_zero_matches() {
    let body = r#"{"count":0,"results":[]}"#;
    let (base_url, _rx) = serve_script(vec![login_response(), json_response("200 OK", body)]).await;
    let session = session(&base_url);

    let result: Result<serde_json::Value, Error> = session
        .get_object_by_name("pool", "missing", &ApiOptions::default())
        .await;
    match result {
        Err(Error::Lookup(message)) => assert!(message.contains("no object of type pool")),
        other => panic!("expected lookup error, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn object_lookup_rejects_ambiguous_matches() {
    let body = r#"{"count":2,"results":[{"name":"p"},{"name":"p"}]}"#;
    let (base_url, _rx) = serve_script(vec![login_response(), json_response("200 OK", body)]).await;
    let session = session(&base_url);

    let result: Result<serde_json::Value, Error> = session
        .get_object_by_name("pool", "p", &ApiOptions::default())
        .await;
    match result {
        Err(Error::Lookup(message)) => assert!(message.contains("more than one object")),
        other => panic!("expected lookup error, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn controller_version_comes_from_initial_data() {
    let body = r#"{"version":{"Version":"22.1.3","Date":"2023-01-01"}}"#;
    let (base_url, mut rx) =
        serve_script(vec![login_response(), json_response("200 OK", body)]).await;
    let session = session(&base_url);

    let version = session.get_controller_version().await.expect("version");
    assert_eq!(version, "22.1.3");

    rx.recv().await.expect("login request");
    assert_eq!(
        rx.recv().await.expect("request").path,
        "/api/initial-data"
    );
}

#[tokio::test]
async fn controller_status_check_recovers() {
    let (base_url, mut rx) = serve_script(vec![
        empty_response("503 Service Unavailable"),
        empty_response("200 OK"),
    ])
    .await;
    let session = AviSession::builder(&base_url, "admin")
        .expect("builder")
        .password("hunter2")
        .controller_status_check_limits(3, Duration::from_millis(10))
        .expect("limits")
        .build()
        .expect("build");

    assert!(session.check_controller_status().await.expect("status"));
    assert_eq!(rx.recv().await.expect("request").path, "/api/cluster/status");
    assert_eq!(rx.recv().await.expect("request").path, "/api/cluster/status");
}

#[tokio::test]
async fn controller_status_check_gives_up_after_its_rounds() {
    let (base_url, _rx) = serve_script(vec![
        empty_response("503 Service Unavailable"),
        empty_response("502 Bad Gateway"),
    ])
    .await;
    let session = AviSession::builder(&base_url, "admin")
        .expect("builder")
        .password("hunter2")
        .controller_status_check_limits(2, Duration::from_millis(10))
        .expect("limits")
        .build()
        .expect("build");

    assert!(!session.check_controller_status().await.expect("status"));
}

#[tokio::test]
async fn logout_posts_with_session_cookies() {
    let (base_url, mut rx) =
        serve_script(vec![login_response(), empty_response("200 OK")]).await;
    let session = session(&base_url);

    session.login().await.expect("login");
    session.logout().await.expect("logout");

    rx.recv().await.expect("login request");
    let logout = rx.recv().await.expect("logout request");
    assert_eq!(logout.method, "POST");
    assert_eq!(logout.path, "/logout");
    let cookie = logout.header_value("Cookie").expect("session cookie");
    assert!(cookie.contains("sessionid=sess-123"));
}

#[tokio::test]
async fn user_headers_ride_along_on_every_request() {
    let (base_url, mut rx) =
        serve_script(vec![login_response(), json_response("200 OK", "{}")]).await;
    let session = AviSession::builder(&base_url, "admin")
        .expect("builder")
        .password("hunter2")
        .user_header("X-Request-Source", "ako-sync")
        .expect("header")
        .disable_controller_status_check(true)
        .build()
        .expect("build");

    let _: serde_json::Value = session.get("api/cloud").await.expect("get");

    let login = rx.recv().await.expect("login request");
    assert_eq!(login.header_value("X-Request-Source"), Some("ako-sync"));
    let get = rx.recv().await.expect("get request");
    assert_eq!(get.header_value("X-Request-Source"), Some("ako-sync"));
}
