use serde::{Deserialize, Serialize};

use super::common::RoleFilterMatchLabel;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HealthMonitor {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_duplicate_monitors: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<HealthMonitorAuthInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_quickstart: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_monitor: Option<HealthMonitorDns>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_monitor: Option<HealthMonitorExternal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_checks: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_monitor: Option<HealthMonitorHttp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https_monitor: Option<HealthMonitorHttp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_federated: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_port: Option<i32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receive_timeout: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_interval: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub successful_checks: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_monitor: Option<HealthMonitorTcp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_monitor: Option<HealthMonitorUdp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMonitorAuthInfo {
    pub password: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HealthMonitorHttp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact_http_request: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_request: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_request_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_response: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http_response_code: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintenance_code: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_size: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HealthMonitorTcp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_half_open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_request: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_response: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HealthMonitorUdp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_request: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_response: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMonitorDns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qtype: Option<String>,
    pub query_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_string: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMonitorExternal {
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_parameters: Option<String>,
}
