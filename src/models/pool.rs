use serde::{Deserialize, Serialize};

use super::common::{
    ConfigPbAttributes, DiscoveredNetwork, GeoLocation, IpAddr, NetworkFilter, PlacementNetwork,
    RoleFilterMatchLabel,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Pool {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_profile_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub append_port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_persistence_profile_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_estimation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_config_cksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_ramp_duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_server_port: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_server_on_dns_refresh: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain_name: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub east_west: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_http2: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_action: Option<FailAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graceful_disable_timeout: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_monitor_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http2_properties: Option<Http2PoolProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_server_port: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_health_monitor: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lb_algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lb_algorithm_consistent_hash_hdr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lb_algorithm_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup_server_by_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_connections_per_server: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_health_monitors_up: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_servers_up: Option<u32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<NetworkFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub placement_networks: Vec<PlacementNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrite_host_header_to_server_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_key_and_certificate_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_profile_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier1_lr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_service_port: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscaling_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discovered_networks: Vec<DiscoveredNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_orchestration_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub ip: IpAddr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nw_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve_server_by_dns: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrite_host_header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_node: Option<String>,
    #[serde(default, rename = "static", skip_serializing_if = "Option::is_none")]
    pub static_: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_network: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PoolGroup {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_config_cksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deactivate_primary_pool_on_down: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_policy_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_http2: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_action: Option<FailAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implicit_priority_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<PoolGroupMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_servers: Option<u32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_labels_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolGroupMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_state: Option<String>,
    pub pool_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailActionEnum {
    FailActionHttpRedirect,
    FailActionHttpLocalRsp,
    FailActionCloseConn,
    FailActionBackupPool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_rsp: Option<FailActionHttpLocalResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<FailActionHttpRedirect>,
    #[serde(rename = "type")]
    pub type_: FailActionEnum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailActionHttpRedirect {
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FailActionHttpLocalResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Http2PoolProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_http2_control_frames_per_connection: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_http2_header_field_size: Option<u32>,
}
