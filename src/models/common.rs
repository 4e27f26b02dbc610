use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IpAddrType {
    V4,
    V6,
    Dns,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpAddr {
    pub addr: String,
    #[serde(rename = "type")]
    pub type_: IpAddrType,
}

impl IpAddr {
    pub fn v4(addr: impl Into<String>) -> Self {
        IpAddr {
            addr: addr.into(),
            type_: IpAddrType::V4,
        }
    }

    pub fn v6(addr: impl Into<String>) -> Self {
        IpAddr {
            addr: addr.into(),
            type_: IpAddrType::V6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpAddrPrefix {
    pub ip_addr: IpAddr,
    pub mask: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpAddrRange {
    pub begin: IpAddr,
    pub end: IpAddr,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigPbAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleFilterMatchLabel {
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomTag {
    pub tag_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_val: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeoLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveredNetwork {
    pub network_ref: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnet: Vec<IpAddrPrefix>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnet6: Vec<IpAddrPrefix>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DnsInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_records_in_response: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortRange {
    pub start: i32,
    pub end: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selector {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<KeyValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementNetwork {
    pub network_ref: String,
    pub subnet: IpAddrPrefix,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NetworkFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_filter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MetricsRealTimeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub enabled: bool,
}
