use serde::{Deserialize, Serialize};

use super::common::{ConfigPbAttributes, RoleFilterMatchLabel};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApplicationProfile {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_config_cksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_profile: Option<HttpApplicationProfile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_client_ip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_client_port: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HttpApplicationProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_dots_in_header_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_config: Option<HttpCacheConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_body_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_header_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_max_body_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_max_header_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_max_request_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_multiplexing_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_to_https: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub httponly_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keepalive_header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keepalive_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_keepalive_requests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_response_headers_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_accept_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respond_with_100_continue: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_cookie_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_side_redirect: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_app_keepalive_timeout: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub websockets_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_forwarded_proto_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xff_alternate_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xff_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HttpCacheConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggressive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_expire: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic_expire: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_request_cache_control: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cache_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_object_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_types_list: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_object_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_cacheable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xcache_header: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalyticsProfile {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apdex_response_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apdex_response_tolerated_factor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apdex_rtt_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apdex_rtt_tolerated_factor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apdex_server_response_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apdex_server_response_tolerated_factor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_advanced_analytics: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_http_error_codes: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hs_event_throttle_window: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hs_max_anomaly_penalty: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hs_max_resources_penalty: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hs_max_security_penalty: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}
