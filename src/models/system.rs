use serde::{Deserialize, Serialize};

use super::cloud::TenantConfiguration;
use super::common::IpAddr;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SystemConfiguration {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_criteria_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_license_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_configuration: Option<DnsConfiguration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_virtualservice_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_configuration: Option<EmailConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_cors: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fips_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_tenant_config: Option<TenantConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ntp_configuration: Option<NtpConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portal_configuration: Option<PortalConfiguration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_ciphers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_hmacs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome_workflow_complete: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DnsConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub server_list: Vec<IpAddr>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_server_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_server_port: Option<u32>,
    pub smtp_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NtpConfiguration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ntp_servers: Vec<NtpServer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NtpServer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_number: Option<u32>,
    pub server: IpAddr,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortalConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_basic_authentication: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_http: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_https: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_strength_check: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_to_https: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sslkeyandcertificate_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sslprofile_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_uuid_from_input: Option<bool>,
}
