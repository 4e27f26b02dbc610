use serde::{Deserialize, Serialize};

use super::common::{GeoLocation, IpAddr};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Gslb {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_on_max_retries: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_configs: Vec<DnsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_federated: Option<bool>,
    pub leader_cluster_uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sites: Vec<GslbSite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsConfig {
    pub domain_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GslbSite {
    pub cluster_uuid: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_vses: Vec<GslbSiteDnsVs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_addresses: Vec<IpAddr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GslbGeoLocation>,
    pub member_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GslbSiteDnsVs {
    pub dns_vs_uuid: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GslbGeoLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GslbService {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller_health_status_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_response: Option<GslbServiceDownResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GslbPool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_monitor_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_monitor_scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_federated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_members: Option<u32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_dns_ip: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve_cname: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_persistence_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_edns_client_subnet: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildcard_match: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GslbServiceDownResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_ip: Option<IpAddr>,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GslbPool {
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistent_hash_mask: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<GslbPoolMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_health_monitors_up: Option<u32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GslbPoolMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<IpAddr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GslbGeoLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vs_uuid: Option<String>,
}
