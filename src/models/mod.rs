mod cloud;
mod common;
mod gslb;
mod health_monitor;
mod pool;
mod profiles;
mod service_engine;
mod ssl;
mod system;
mod vip;
mod virtual_service;

pub use cloud::{
    Cloud, DockerConfiguration, OShiftK8sConfiguration, OpenStackConfiguration, Tenant,
    TenantConfiguration,
};
pub use common::{
    ConfigPbAttributes, CustomTag, DiscoveredNetwork, DnsInfo, GeoLocation, IpAddr, IpAddrPrefix,
    IpAddrRange, IpAddrType, KeyValue, MetricsRealTimeUpdate, NetworkFilter, PlacementNetwork,
    PortRange, RoleFilterMatchLabel, Selector,
};
pub use gslb::{
    DnsConfig, Gslb, GslbGeoLocation, GslbPool, GslbPoolMember, GslbService,
    GslbServiceDownResponse, GslbSite, GslbSiteDnsVs,
};
pub use health_monitor::{
    HealthMonitor, HealthMonitorAuthInfo, HealthMonitorDns, HealthMonitorExternal,
    HealthMonitorHttp, HealthMonitorTcp, HealthMonitorUdp,
};
pub use pool::{
    FailAction, FailActionEnum, FailActionHttpLocalResponse, FailActionHttpRedirect,
    Http2PoolProperties, Pool, PoolGroup, PoolGroupMember, Server,
};
pub use profiles::{AnalyticsProfile, ApplicationProfile, HttpApplicationProfile, HttpCacheConfig};
pub use service_engine::{ControllerProperties, ServiceEngineGroup};
pub use ssl::{
    CertificateAuthority, SslCertificate, SslCertificateDescription, SslKeyAndCertificate,
    SslKeyEcParams, SslKeyParams, SslKeyRsaParams, SslProfile, SslVersion,
};
pub use system::{
    DnsConfiguration, EmailConfiguration, NtpConfiguration, NtpServer, PortalConfiguration,
    SystemConfiguration,
};
pub use vip::{IpNetworkSubnet, Vip, VipPlacementNetwork, VsVip};
pub use virtual_service::{
    AnalyticsPolicy, FullClientLogs, PerformanceLimits, ScaleStatus, Service, ServicePoolSelector,
    VirtualService,
};
