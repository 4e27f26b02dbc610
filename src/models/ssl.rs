use serde::{Deserialize, Serialize};

use super::common::{ConfigPbAttributes, RoleFilterMatchLabel};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SslProfile {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_ciphers: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accepted_versions: Vec<SslVersion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cipher_enums: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciphersuites: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_early_data: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_ssl_session_reuse: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_federated: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_client_cipher_ordering: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_close_notify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_session_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SslVersion {
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SslKeyAndCertificate {
    #[serde(
        default,
        rename = "_last_modified",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ca_certs: Vec<CertificateAuthority>,
    pub certificate: SslCertificate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_base64: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_management_profile_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_base64: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_params: Option<SslKeyParams>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CertificateAuthority {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SslCertificate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until_expire: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<SslCertificateDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_signed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<SslCertificateDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subject_alt_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SslCertificateDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinguished_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SslKeyParams {
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ec_params: Option<SslKeyEcParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsa_params: Option<SslKeyRsaParams>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SslKeyEcParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SslKeyRsaParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exponent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_size: Option<String>,
}
