use serde::{Deserialize, Serialize};

use super::common::{ConfigPbAttributes, DnsInfo, IpAddr, RoleFilterMatchLabel};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VirtualService {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_standby_se_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_policy: Option<AnalyticsPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_profile_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_profile_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_config_cksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_info: Vec<DnsInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub east_west_placement: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_autogw: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_rhi: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cps_per_client: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_pools_up: Option<u32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_profile_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_security_policy_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_limits: Option<PerformanceLimits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_group_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub se_group_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_policy_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_pool_select: Vec<ServicePoolSelector>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snat_ip: Vec<IpAddr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssl_key_and_certificate_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_profile_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_sess_cache_avg_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_clone_profile_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_enabled: Option<bool>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_bridge_ip_as_vip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vh_domain_name: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vh_parent_vs_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_context_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vsvip_cloud_config_cksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vsvip_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_http2: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_ssl: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active_ftp_data_port: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_application_profile_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_network_profile_ref: Option<String>,
    pub port: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_range_end: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalyticsPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_headers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_insights: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_client_logs: Option<FullClientLogs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics_realtime_update: Option<super::common::MetricsRealTimeUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udf_log_throttle: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullClientLogs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttle: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PerformanceLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_connections: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_throughput: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicePoolSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_pool_group_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_pool_ref: Option<String>,
    pub service_port: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_port_range_end: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_protocol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScaleStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_se_assigned: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_se_requested: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
