use avialb::{
    FailAction, FailActionEnum, HealthMonitor, HealthMonitorHttp, IpAddr, IpAddrType, Pool,
    VirtualService, Vip, VsVip,
};
use serde_json::json;

#[test]
fn optional_fields_are_omitted_not_nulled() {
    let vs = VirtualService {
        name: "web-vs".to_string(),
        ..VirtualService::default()
    };
    let value = serde_json::to_value(&vs).expect("serialize");
    assert_eq!(value, json!({"name": "web-vs"}));
}

#[test]
fn last_modified_uses_the_underscore_wire_name() {
    let raw = json!({
        "name": "web-vs",
        "_last_modified": "1700000000000000",
        "uuid": "virtualservice-1"
    });
    let vs: VirtualService = serde_json::from_value(raw).expect("deserialize");
    assert_eq!(vs.last_modified.as_deref(), Some("1700000000000000"));

    let back = serde_json::to_value(&vs).expect("serialize");
    assert_eq!(back["_last_modified"], "1700000000000000");
}

#[test]
fn ip_addr_type_serializes_to_the_controller_enum() {
    let addr = IpAddr::v4("10.0.0.1");
    let value = serde_json::to_value(&addr).expect("serialize");
    assert_eq!(value, json!({"addr": "10.0.0.1", "type": "V4"}));

    let parsed: IpAddr = serde_json::from_value(json!({"addr": "::1", "type": "V6"})).expect("v6");
    assert!(matches!(parsed.type_, IpAddrType::V6));
}

#[test]
fn fail_action_type_uses_screaming_snake_values() {
    let action = FailAction {
        local_rsp: None,
        redirect: None,
        type_: FailActionEnum::FailActionCloseConn,
    };
    let value = serde_json::to_value(&action).expect("serialize");
    assert_eq!(value, json!({"type": "FAIL_ACTION_CLOSE_CONN"}));
}

#[test]
fn unknown_fields_from_newer_controllers_are_tolerated() {
    let raw = json!({
        "name": "web-pool",
        "uuid": "pool-1",
        "some_field_from_a_future_release": {"nested": true}
    });
    let pool: Pool = serde_json::from_value(raw).expect("deserialize");
    assert_eq!(pool.uuid.as_deref(), Some("pool-1"));
}

#[test]
fn vsvip_round_trips_its_vip_list() {
    let raw = json!({
        "name": "vsvip-web",
        "vip": [{
            "vip_id": "0",
            "auto_allocate_ip": true,
            "ip_address": {"addr": "10.10.10.1", "type": "V4"}
        }]
    });
    let vsvip: VsVip = serde_json::from_value(raw).expect("deserialize");
    assert_eq!(vsvip.vip.len(), 1);
    let vip: &Vip = &vsvip.vip[0];
    assert_eq!(vip.vip_id, "0");
    assert_eq!(vip.auto_allocate_ip, Some(true));
}

#[test]
fn health_monitor_http_sections_stay_separate() {
    let monitor = HealthMonitor {
        name: "hm-http".to_string(),
        type_: "HEALTH_MONITOR_HTTP".to_string(),
        http_monitor: Some(HealthMonitorHttp {
            http_request: Some("HEAD / HTTP/1.0".to_string()),
            http_response_code: vec!["HTTP_2XX".to_string(), "HTTP_3XX".to_string()],
            ..HealthMonitorHttp::default()
        }),
        ..HealthMonitor::default()
    };
    let value = serde_json::to_value(&monitor).expect("serialize");
    assert_eq!(value["http_monitor"]["http_request"], "HEAD / HTTP/1.0");
    assert!(value.get("tcp_monitor").is_none());
    assert!(value.get("https_monitor").is_none());
}
