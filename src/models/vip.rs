use serde::{Deserialize, Serialize};

use super::common::{
    ConfigPbAttributes, DiscoveredNetwork, DnsInfo, IpAddr, IpAddrPrefix, RoleFilterMatchLabel,
    Selector,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VsVip {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bgp_peer_labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_info: Vec<DnsInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub east_west_placement: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipam_selector: Option<Selector>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier1_lr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_standard_alb: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vip: Vec<Vip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf_context_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vsvip_cloud_config_cksum: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_allocate_floating_ip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_allocate_ip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_allocate_ip_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avi_allocated_fip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avi_allocated_vip: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discovered_networks: Vec<DiscoveredNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating_ip: Option<IpAddr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating_ip6: Option<IpAddr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating_subnet_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip6_address: Option<IpAddr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<IpAddr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipam_network_subnet: Option<IpNetworkSubnet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub placement_networks: Vec<VipPlacementNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<IpAddrPrefix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet6: Option<IpAddrPrefix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet6_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_uuid: Option<String>,
    pub vip_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VipPlacementNetwork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<IpAddrPrefix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet6: Option<IpAddrPrefix>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IpNetworkSubnet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<IpAddrPrefix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet6: Option<IpAddrPrefix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet6_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_uuid: Option<String>,
}
