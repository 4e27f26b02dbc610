use serde::{Deserialize, Serialize};

use super::common::{IpAddrPrefix, MetricsRealTimeUpdate};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceEngineGroup {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_standby: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggressive_failure_detection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_cache_percent: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_rebalance: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_rebalance_interval: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_redistribute_active_standby_load: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_se: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_memory_percentage: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_reserve: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_socket_affinity: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedicated_dispatcher_core: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_per_se: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_shared_config_memory: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ha_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_attribute_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_attribute_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_flavor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub least_load_core_selection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_disksz: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cpu_usage: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_scaleout_per_vs: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_se: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_vs_per_se: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem_reserve: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_per_se: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mgmt_network_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mgmt_subnet: Option<IpAddrPrefix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cpu_usage: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_scaleout_per_vs: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_se: Option<i32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realtime_se_metrics: Option<MetricsRealTimeUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub se_bandwidth_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub se_deprovision_delay: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub se_name_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_ip_subnets: Vec<IpAddrPrefix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcpus_per_se: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ControllerProperties {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_idle_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appviewx_compat_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attach_ip_retry_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attach_ip_retry_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup_expired_authtoken_timeout_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup_sessions_timeout_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_ip_gratuitous_arp_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crashed_se_reboot: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead_se_detection_timer: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_refresh_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatal_error_lease_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_dead_se_in_grp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pcap_per_tenant: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistence_key_rotate_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_host_fail: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub se_create_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub se_failover_attempt_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub se_offline_del: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub se_vnic_cooldown: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssl_certificate_expiry_warning_days: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_dns_ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_lease_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnic_op_fail_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vs_awaiting_se_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vs_key_rotate_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warmstart_se_reconnect_wait_time: Option<u32>,
}
