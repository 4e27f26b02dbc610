use serde::{Deserialize, Serialize};

use super::common::{ConfigPbAttributes, CustomTag, IpAddrPrefix};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Cloud {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscale_polling_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_tags: Vec<CustomTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhcp_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_provider_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_resolution_on_se: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_configuration: Option<DockerConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub east_west_dns_provider_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub east_west_ipam_provider_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_vip_on_all_interfaces: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_vip_static_routes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip6_autocfg_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipam_provider_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obj_name_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openstack_configuration: Option<OpenStackConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oshiftk8s_configuration: Option<OShiftK8sConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_static_routes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub se_group_template_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_based_dns_registration: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub vtype: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DockerConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_sync_frequency: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_tls_key_and_certificate_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_tls_key_and_certificate_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_port_match_http_service: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_auto_backend_service_sync: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_auto_frontend_service_sync: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub east_west_placement_subnet: Option<IpAddrPrefix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_event_subscription: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http_container_ports: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub se_deployment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub se_volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services_accessible_all_interfaces: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ucp_nodes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_container_ip_port: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_controller_image: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OpenStackConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_tenant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_drive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_networks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_floatingips: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystone_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mgmt_network_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mgmt_network_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privilege: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_se: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_admin_url: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_internal_endpoints: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OShiftK8sConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_sync_frequency: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_assign_fqdn: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_tls_key_and_certificate_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_tls_key_and_certificate_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_port_match_http_service: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_service_as_east_west_service: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_auto_backend_service_sync: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_auto_frontend_service_sync: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub east_west_placement_subnet: Option<IpAddrPrefix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_event_subscription: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http_container_ports: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub master_nodes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_availability_zone_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdn_overlay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Tenant {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_settings: Option<TenantConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<bool>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TenantConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub se_in_provider_context: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_access_to_provider_se: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_vrf: Option<bool>,
}
