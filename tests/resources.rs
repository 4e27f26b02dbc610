mod common;

use avialb::{
    ApiOptions, AviSession, Error, IpAddr, PatchOp, Pool, Server, SystemConfiguration,
    VirtualService,
};
use common::{empty_response, json_response, login_response, serve_script};
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
async fn create_posts_the_object_to_its_collection() {
    let created = r#"{"name":"web-vs","uuid":"virtualservice-1","url":"https://ctrl/api/virtualservice/virtualservice-1"}"#;
    let (base_url, mut rx) =
        serve_script(vec![login_response(), json_response("200 OK", created)]).await;
    let session = session(&base_url);

    let vs = VirtualService {
        name: "web-vs".to_string(),
        enabled: Some(true),
        pool_ref: Some("/api/pool/pool-1".to_string()),
        ..VirtualService::default()
    };
    let persisted = session.virtual_service().create(&vs).await.expect("create");
    assert_eq!(persisted.uuid.as_deref(), Some("virtualservice-1"));

    rx.recv().await.expect("login request");
    let create = rx.recv().await.expect("create request");
    assert_eq!(create.method, "POST");
    assert_eq!(create.path, "/api/virtualservice");
    let body = create.json_body();
    assert_eq!(
        body,
        json!({
            "name": "web-vs",
            "enabled": true,
            "pool_ref": "/api/pool/pool-1",
        })
    );
}

#[tokio::test]
async fn update_puts_to_the_object_uuid() {
    let body = r#"{"name":"web-pool","uuid":"pool-1"}"#;
    let (base_url, mut rx) =
        serve_script(vec![login_response(), json_response("200 OK", body)]).await;
    let session = session(&base_url);

    let pool = Pool {
        name: "web-pool".to_string(),
        uuid: Some("pool-1".to_string()),
        default_server_port: Some(8080),
        servers: vec![Server {
            ip: IpAddr::v4("10.0.0.12"),
            port: Some(8080),
            enabled: Some(true),
            autoscaling_group_name: None,
            availability_zone: None,
            description: None,
            discovered_networks: Vec::new(),
            external_orchestration_id: None,
            external_uuid: None,
            hostname: None,
            location: None,
            mac_address: None,
            nw_ref: None,
            ratio: None,
            resolve_server_by_dns: None,
            rewrite_host_header: None,
            server_node: None,
            static_: None,
            verify_network: None,
            vm_ref: None,
        }],
        ..Pool::default()
    };
    session.pool().update(&pool).await.expect("update");

    rx.recv().await.expect("login request");
    let update = rx.recv().await.expect("update request");
    assert_eq!(update.method, "PUT");
    assert_eq!(update.path, "/api/pool/pool-1");
    let body = update.json_body();
    assert_eq!(body["servers"][0]["ip"], json!({"addr": "10.0.0.12", "type": "V4"}));
}

#[tokio::test]
async fn update_without_a_uuid_is_a_client_side_error() {
    let (base_url, _rx) = serve_script(vec![login_response()]).await;
    let session = session(&base_url);

    let pool = Pool {
        name: "web-pool".to_string(),
        ..Pool::default()
    };
    let result = session.pool().update(&pool).await;
    match result {
        Err(Error::Config(message)) => assert!(message.contains("requires its uuid")),
        other => panic!("expected config error, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn get_by_name_resolves_through_the_lookup_query() {
    let body = r#"{"count":1,"results":[{"name":"web-pool","uuid":"pool-1"}]}"#;
    let (base_url, mut rx) =
        serve_script(vec![login_response(), json_response("200 OK", body)]).await;
    let session = session(&base_url);

    let pool = session.pool().get_by_name("web-pool").await.expect("lookup");
    assert_eq!(pool.uuid.as_deref(), Some("pool-1"));

    rx.recv().await.expect("login request");
    let get = rx.recv().await.expect("lookup request");
    assert_eq!(get.path, "/api/pool");
    assert_eq!(get.query_value("name"), Some("web-pool"));
}

#[tokio::test]
async fn delete_by_name_resolves_then_deletes() {
    let lookup = r#"{"count":1,"results":[{"name":"web-vs","uuid":"virtualservice-1"}]}"#;
    let (base_url, mut rx) = serve_script(vec![
        login_response(),
        json_response("200 OK", lookup),
        empty_response("204 No Content"),
    ])
    .await;
    let session = session(&base_url);

    session
        .virtual_service()
        .delete_by_name("web-vs")
        .await
        .expect("delete by name");

    rx.recv().await.expect("login request");
    assert_eq!(rx.recv().await.expect("request").path, "/api/virtualservice");
    let delete = rx.recv().await.expect("delete request");
    assert_eq!(delete.method, "DELETE");
    assert_eq!(delete.path, "/api/virtualservice/virtualservice-1");
}

#[tokio::test]
async fn get_all_lists_the_collection() {
    let body = r#"{"count":2,"results":[
        {"name":"hm-1","uuid":"healthmonitor-1","type":"HEALTH_MONITOR_HTTP"},
        {"name":"hm-2","uuid":"healthmonitor-2","type":"HEALTH_MONITOR_TCP"}
    ]}"#;
    let (base_url, mut rx) =
        serve_script(vec![login_response(), json_response("200 OK", body)]).await;
    let session = session(&base_url);

    let monitors = session.health_monitor().get_all().await.expect("list");
    assert_eq!(monitors.len(), 2);
    assert_eq!(monitors[0].type_, "HEALTH_MONITOR_HTTP");

    rx.recv().await.expect("login request");
    assert_eq!(rx.recv().await.expect("request").path, "/api/healthmonitor");
}

#[tokio::test]
async fn patch_goes_to_the_object_uuid() {
    let (base_url, mut rx) = serve_script(vec![
        login_response(),
        empty_response("204 No Content"),
    ])
    .await;
    let session = session(&base_url);

    let patched = session
        .pool()
        .patch(
            "pool-1",
            PatchOp::Add,
            &json!({"servers": [{"ip": {"addr": "10.0.0.13", "type": "V4"}}]}),
        )
        .await
        .expect("patch");
    assert!(patched.is_none());

    rx.recv().await.expect("login request");
    let patch = rx.recv().await.expect("patch request");
    assert_eq!(patch.method, "PATCH");
    assert_eq!(patch.path, "/api/pool/pool-1");
    assert!(patch.json_body().get("add").is_some());
}

#[tokio::test]
async fn tenant_override_applies_to_resource_calls() {
    let body = r#"{"count":1,"results":[{"name":"web-pool","uuid":"pool-1"}]}"#;
    let (base_url, mut rx) =
        serve_script(vec![login_response(), json_response("200 OK", body)]).await;
    let session = session(&base_url);

    let options = ApiOptions::new().tenant("finance");
    session
        .pool()
        .get_by_name_with_options("web-pool", &options)
        .await
        .expect("lookup");

    rx.recv().await.expect("login request");
    let get = rx.recv().await.expect("lookup request");
    assert_eq!(get.header_value("X-Avi-Tenant"), Some("finance"));
}

#[tokio::test]
async fn system_configuration_is_addressed_without_a_uuid() {
    let body = r#"{"uuid":"default","welcome_workflow_complete":true}"#;
    let (base_url, mut rx) = serve_script(vec![
        login_response(),
        json_response("200 OK", body),
        empty_response("204 No Content"),
    ])
    .await;
    let session = session(&base_url);

    let config = session
        .get_system_configuration()
        .await
        .expect("get system configuration");
    assert_eq!(config.welcome_workflow_complete, Some(true));

    let updated = SystemConfiguration {
        welcome_workflow_complete: Some(true),
        ..config
    };
    let response = session
        .put_system_configuration(&updated)
        .await
        .expect("put system configuration");
    assert!(response.is_none());

    rx.recv().await.expect("login request");
    let get = rx.recv().await.expect("get request");
    assert_eq!(get.method, "GET");
    assert_eq!(get.path, "/api/systemconfiguration");
    let put = rx.recv().await.expect("put request");
    assert_eq!(put.method, "PUT");
    assert_eq!(put.path, "/api/systemconfiguration");
}
