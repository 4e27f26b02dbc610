use std::time::Duration;

pub(crate) const DEFAULT_API_VERSION: &str = "18.2.6";
pub(crate) const DEFAULT_TENANT: &str = "admin";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub(crate) const DEFAULT_MAX_API_RETRIES: u32 = 3;
pub(crate) const DEFAULT_API_RETRY_INTERVAL: Duration = Duration::from_millis(500);
pub(crate) const DEFAULT_STATUS_CHECK_ROUNDS: u32 = 10;
pub(crate) const DEFAULT_CSP_HOST: &str = "console.cloud.vmware.com";
