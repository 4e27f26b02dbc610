#![forbid(unsafe_code)]

mod client_defaults;
mod error;
mod models;
mod resources;
mod session;

pub use error::{ApiError, ControllerError, Error};

pub use models::{
    AnalyticsPolicy, AnalyticsProfile, ApplicationProfile, CertificateAuthority, Cloud,
    ConfigPbAttributes, ControllerProperties, CustomTag, DiscoveredNetwork, DnsConfig,
    DnsConfiguration, DnsInfo, DockerConfiguration, EmailConfiguration, FailAction,
    FailActionEnum, FailActionHttpLocalResponse, FailActionHttpRedirect, FullClientLogs,
    GeoLocation, Gslb, GslbGeoLocation, GslbPool, GslbPoolMember, GslbService,
    GslbServiceDownResponse, GslbSite, GslbSiteDnsVs, HealthMonitor, HealthMonitorAuthInfo,
    HealthMonitorDns, HealthMonitorExternal, HealthMonitorHttp, HealthMonitorTcp,
    HealthMonitorUdp, Http2PoolProperties, HttpApplicationProfile, HttpCacheConfig, IpAddr,
    IpAddrPrefix, IpAddrRange, IpAddrType, IpNetworkSubnet, KeyValue, MetricsRealTimeUpdate,
    NetworkFilter, NtpConfiguration, NtpServer, OShiftK8sConfiguration, OpenStackConfiguration,
    PerformanceLimits, PlacementNetwork, Pool, PoolGroup, PoolGroupMember, PortRange,
    PortalConfiguration, RoleFilterMatchLabel, ScaleStatus, Selector, Server, Service,
    ServiceEngineGroup, ServicePoolSelector, SslCertificate, SslCertificateDescription,
    SslKeyAndCertificate, SslKeyEcParams, SslKeyParams, SslKeyRsaParams, SslProfile, SslVersion,
    SystemConfiguration, Tenant, TenantConfiguration, Vip, VipPlacementNetwork, VirtualService,
    VsVip,
};

pub use resources::{AviObject, ResourceClient};

pub use session::{
    ApiOptions, AviSession, AviSessionBuilder, CollectionResult, PatchOp, RefreshTokenCallback,
};
