use log::{debug, error, info, warn};
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, COOKIE, REFERER, SET_COOKIE,
};
use reqwest::{Certificate, Client as HttpClient, Method, Response, StatusCode};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use url::Url;

use crate::client_defaults::{
    DEFAULT_API_RETRY_INTERVAL, DEFAULT_API_VERSION, DEFAULT_CSP_HOST, DEFAULT_MAX_API_RETRIES,
    DEFAULT_STATUS_CHECK_ROUNDS, DEFAULT_TENANT, DEFAULT_TIMEOUT,
};
use crate::error::Error;

use super::common;

mod fileservice;
mod objects;

/// Callback producing a fresh authentication token for each login.
pub type RefreshTokenCallback = Box<dyn Fn() -> Result<String, Error> + Send + Sync>;

/// Builder for [`AviSession`].
///
/// The `base_url` is the controller address, for example
/// `https://controller.example.com`. Exactly one authentication mode should
/// be configured: a password, an auth token (static or refreshed through a
/// callback), or a cloud-services API token.
pub struct AviSessionBuilder {
    base_url: Url,
    username: String,
    password: Option<String>,
    auth_token: Option<String>,
    refresh_auth_token: Option<RefreshTokenCallback>,
    csp_host: String,
    csp_token: Option<String>,
    tenant: String,
    version: String,
    timeout: Option<Duration>,
    insecure: bool,
    ca_certs: Vec<Certificate>,
    user_headers: HeaderMap,
    max_api_retries: u32,
    api_retry_interval: Duration,
    status_check_rounds: u32,
    status_check_interval: Option<Duration>,
    status_check_disabled: bool,
}

impl AviSessionBuilder {
    /// Creates a builder for the controller at `base_url`.
    pub fn new(base_url: impl AsRef<str>, username: impl Into<String>) -> Result<Self, Error> {
        let mut base_url = Url::parse(base_url.as_ref())?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            username: username.into(),
            password: None,
            auth_token: None,
            refresh_auth_token: None,
            csp_host: DEFAULT_CSP_HOST.to_string(),
            csp_token: None,
            tenant: DEFAULT_TENANT.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            insecure: false,
            ca_certs: Vec::new(),
            user_headers: HeaderMap::new(),
            max_api_retries: DEFAULT_MAX_API_RETRIES,
            api_retry_interval: DEFAULT_API_RETRY_INTERVAL,
            status_check_rounds: DEFAULT_STATUS_CHECK_ROUNDS,
            status_check_interval: None,
            status_check_disabled: false,
        })
    }

    /// Authenticate with a password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Authenticate with a pre-generated auth token instead of a password.
    pub fn auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }

    /// Regenerate the auth token through `callback` on every login.
    pub fn refresh_auth_token<F>(mut self, callback: F) -> Self
    where
        F: Fn() -> Result<String, Error> + Send + Sync + 'static,
    {
        self.refresh_auth_token = Some(Box::new(callback));
        self
    }

    /// Authenticate through the cloud services portal with an API token.
    pub fn csp_token(mut self, csp_token: impl Into<String>) -> Self {
        self.csp_token = Some(csp_token.into());
        self
    }

    /// Overrides the cloud services portal host.
    pub fn csp_host(mut self, csp_host: impl Into<String>) -> Self {
        self.csp_host = csp_host.into();
        self
    }

    /// Default tenant for API requests.
    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = tenant.into();
        self
    }

    /// Controller API version sent with every request.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Request timeout for the underlying HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Skip TLS certificate verification for the controller connection.
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Adds a PEM-encoded CA certificate to the trust store.
    pub fn add_ca_cert_pem(mut self, ca_pem: &[u8]) -> Result<Self, Error> {
        self.ca_certs.push(Certificate::from_pem(ca_pem)?);
        Ok(self)
    }

    /// Adds a custom header to every request.
    pub fn user_header(
        mut self,
        header: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, Error> {
        let name = HeaderName::from_bytes(header.as_ref().as_bytes())
            .map_err(|e| Error::Config(format!("invalid header name: {e}")))?;
        let value = HeaderValue::from_str(value.as_ref())
            .map_err(|e| Error::Config(format!("invalid header value: {e}")))?;
        self.user_headers.insert(name, value);
        Ok(self)
    }

    /// Total request attempts before a failing call is abandoned.
    pub fn max_api_retries(mut self, max_api_retries: u32) -> Self {
        self.max_api_retries = max_api_retries;
        self
    }

    /// Pause between request attempts.
    pub fn api_retry_interval(mut self, api_retry_interval: Duration) -> Self {
        self.api_retry_interval = api_retry_interval;
        self
    }

    /// Bounds the controller-up poll that runs before each retry.
    pub fn controller_status_check_limits(
        mut self,
        rounds: u32,
        interval: Duration,
    ) -> Result<Self, Error> {
        if rounds == 0 || interval.is_zero() {
            return Err(Error::Config(
                "status check rounds and interval must be greater than zero".to_string(),
            ));
        }
        self.status_check_rounds = rounds;
        self.status_check_interval = Some(interval);
        Ok(self)
    }

    /// Skip the controller-up poll and retry on the plain interval instead.
    pub fn disable_controller_status_check(mut self, disable: bool) -> Self {
        self.status_check_disabled = disable;
        self
    }

    /// Builds the session without contacting the controller; the login
    /// exchange runs before the first API call.
    pub fn build(self) -> Result<AviSession, Error> {
        HeaderValue::from_str(&self.version)
            .map_err(|e| Error::Config(format!("invalid api version: {e}")))?;
        HeaderValue::from_str(&self.tenant)
            .map_err(|e| Error::Config(format!("invalid tenant: {e}")))?;
        let mut builder = HttpClient::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if self.insecure {
            warn!("strict certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }
        for cert in self.ca_certs {
            builder = builder.add_root_certificate(cert);
        }
        let http = builder.build()?;
        Ok(AviSession {
            base_url: self.base_url,
            http,
            username: self.username,
            password: self.password,
            refresh_auth_token: self.refresh_auth_token,
            csp_host: self.csp_host,
            csp_token: self.csp_token,
            tenant: self.tenant,
            version: self.version,
            user_headers: self.user_headers,
            max_api_retries: self.max_api_retries.max(1),
            api_retry_interval: self.api_retry_interval,
            status_check_rounds: self.status_check_rounds,
            status_check_interval: self.status_check_interval,
            status_check_disabled: self.status_check_disabled,
            state: RwLock::new(SessionState {
                auth_token: self.auth_token,
                ..SessionState::default()
            }),
        })
    }

    /// Builds the session and performs the login exchange immediately.
    pub async fn connect(self) -> Result<AviSession, Error> {
        let session = self.build()?;
        session.login().await?;
        Ok(session)
    }
}

#[derive(Default)]
struct SessionState {
    auth_token: Option<String>,
    session_id: String,
    csrf_token: String,
    csp_access_token: String,
}

/// An authenticated session against one Avi controller.
///
/// Use [`AviSession::builder`]. The session re-authenticates transparently
/// when the controller invalidates it and retries requests that fail with
/// transport errors, 419 or 5xx responses.
pub struct AviSession {
    base_url: Url,
    http: HttpClient,
    username: String,
    password: Option<String>,
    refresh_auth_token: Option<RefreshTokenCallback>,
    csp_host: String,
    csp_token: Option<String>,
    tenant: String,
    version: String,
    user_headers: HeaderMap,
    max_api_retries: u32,
    api_retry_interval: Duration,
    status_check_rounds: u32,
    status_check_interval: Option<Duration>,
    status_check_disabled: bool,
    state: RwLock<SessionState>,
}

impl AviSession {
    /// Returns a builder for a controller session.
    pub fn builder(
        base_url: impl AsRef<str>,
        username: impl Into<String>,
    ) -> Result<AviSessionBuilder, Error> {
        AviSessionBuilder::new(base_url, username)
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The default tenant for this session.
    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    /// The API version sent with every request.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Performs the login exchange and stores the resulting session state.
    ///
    /// Transport failures are retried on the API retry budget; an HTTP error
    /// from the controller is final.
    pub async fn login(&self) -> Result<(), Error> {
        if self.csp_token.is_some() {
            return self.fetch_csp_access_token().await;
        }
        let mut attempt: u32 = 0;
        loop {
            match self.login_once().await {
                Ok(()) => return Ok(()),
                Err(Error::Http(err)) if attempt + 1 < self.max_api_retries => {
                    warn!("login transport error, retrying: {err}");
                    attempt += 1;
                    tokio::time::sleep(self.api_retry_interval).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn login_once(&self) -> Result<(), Error> {
        if let Some(ref refresh) = self.refresh_auth_token {
            let token = refresh()?;
            self.lock_state_mut().auth_token = Some(token);
        }
        let mut credentials = serde_json::Map::new();
        credentials.insert(
            "username".to_string(),
            serde_json::Value::String(self.username.clone()),
        );
        let auth_token = self.lock_state().auth_token.clone();
        match (auth_token, &self.password) {
            (Some(token), _) => {
                credentials.insert("token".to_string(), serde_json::Value::String(token));
            }
            (None, Some(password)) => {
                credentials.insert(
                    "password".to_string(),
                    serde_json::Value::String(password.clone()),
                );
            }
            (None, None) => {
                return Err(Error::Config(
                    "no password, auth token or csp token configured".to_string(),
                ));
            }
        }
        let body = serde_json::Value::Object(credentials);
        debug!(
            "POST login payload {}",
            common::scrub_credentials(&body.to_string())
        );
        let url = self.join_url("login")?;
        let resp = self
            .http
            .post(url)
            .headers(self.decorated_headers(None, true)?)
            .json(&body)
            .send()
            .await?;
        self.collect_cookies(&resp);
        let status = resp.status();
        if !status.is_success() {
            let body = self.response_bytes(resp).await?;
            return Err(common::parse_error_from_body(
                "POST",
                "login",
                status.as_u16(),
                &body,
            ));
        }
        debug!("login to {} established a session", self.base_url);
        Ok(())
    }

    /// Ends the controller session.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.join_url("logout")?;
        let headers = self.decorated_headers(None, false)?;
        self.http.post(url).headers(headers).send().await?;
        Ok(())
    }

    /// Polls the controller cluster status until it responds with something
    /// other than 500/502/503, or the configured rounds run out.
    pub async fn check_controller_status(&self) -> Result<bool, Error> {
        let url = self.join_url("api/cluster/status")?;
        for round in 0..self.status_check_rounds {
            match self.http.get(url.clone()).send().await {
                Ok(resp) => {
                    let code = resp.status().as_u16();
                    if code != 500 && code != 502 && code != 503 {
                        return Ok(true);
                    }
                    info!("controller still down (HTTP {code}), round {round}");
                }
                Err(err) => warn!("controller status probe failed: {err}"),
            }
            let delay = match self.status_check_interval {
                Some(interval) => interval,
                None => Duration::from_secs_f64(((round as f64).exp() * 3.0).min(30.0)),
            };
            tokio::time::sleep(delay).await;
        }
        Ok(false)
    }

    async fn fetch_csp_access_token(&self) -> Result<(), Error> {
        let token = match &self.csp_token {
            Some(token) => token.clone(),
            None => return Err(Error::Config("no csp token configured".to_string())),
        };
        let uri = format!(
            "https://{}/csp/gateway/am/api/auth/api-tokens/authorize",
            self.csp_host
        );
        let mut last_detail = String::new();
        for attempt in 0..self.max_api_retries {
            if attempt > 0 {
                tokio::time::sleep(Duration::from_secs(10)).await;
            }
            let result = self
                .http
                .post(&uri)
                .form(&[("api_token", token.as_str())])
                .send()
                .await;
            match result {
                Ok(resp) if resp.status().is_success() => {
                    let body: serde_json::Value = resp.json().await?;
                    match body.get("access_token").and_then(|v| v.as_str()) {
                        Some(access_token) => {
                            self.lock_state_mut().csp_access_token = access_token.to_string();
                            return Ok(());
                        }
                        None => {
                            last_detail = "response carried no access_token".to_string();
                        }
                    }
                }
                Ok(resp) => {
                    let status = resp.status();
                    let body: serde_json::Value = resp.json().await.unwrap_or_default();
                    last_detail = body
                        .get("message")
                        .and_then(|v| v.as_str())
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("HTTP {status}"));
                    warn!("csp token exchange failed, retrying: {last_detail}");
                }
                Err(err) => {
                    last_detail = err.to_string();
                    warn!("csp token exchange failed, retrying: {err}");
                }
            }
        }
        Err(Error::Auth(format!(
            "unable to obtain csp access token: {last_detail}"
        )))
    }

    async fn ensure_session(&self) -> Result<(), Error> {
        let needs_login = {
            let state = self.lock_state();
            if self.csp_token.is_some() {
                state.csp_access_token.is_empty()
            } else {
                state.session_id.is_empty()
            }
        };
        if needs_login {
            self.login().await?;
        }
        Ok(())
    }

    /// Request core shared by every verb: decorates, sends, and retries.
    ///
    /// 401 triggers a re-login before the retry; 419 and 5xx responses and
    /// transport failures burn a retry directly. Before each retry the
    /// controller-up poll runs unless disabled.
    pub(crate) async fn send_with_retries(
        &self,
        method: Method,
        uri: &str,
        payload: Option<&serde_json::Value>,
        tenant: Option<&str>,
    ) -> Result<Response, Error> {
        let url = self.join_url(uri)?;
        let mut attempt: u32 = 0;
        let mut last_err: Option<Error> = None;
        loop {
            if attempt > 0 {
                if attempt >= self.max_api_retries {
                    error!("aborting {method} {uri} after {attempt} attempts");
                    return Err(last_err.unwrap_or(Error::RetriesExhausted {
                        verb: method.to_string(),
                        uri: uri.to_string(),
                        attempts: attempt,
                    }));
                }
                tokio::time::sleep(self.api_retry_interval).await;
            }
            self.ensure_session().await?;
            let mut req = self
                .http
                .request(method.clone(), url.clone())
                .headers(self.decorated_headers(tenant, false)?);
            if let Some(body) = payload {
                debug!(
                    "{} {} payload {}",
                    method,
                    uri,
                    common::scrub_credentials(&body.to_string())
                );
                req = req.json(body);
            }
            let mut relogin = false;
            match req.send().await {
                Err(err) => {
                    error!("transport error on {method} {uri}: {err}");
                    last_err = Some(Error::Http(err));
                }
                Ok(resp) => {
                    let status = resp.status();
                    debug!(
                        "{} {} tenant {} -> {}",
                        method,
                        uri,
                        tenant.unwrap_or(&self.tenant),
                        status
                    );
                    if status == StatusCode::UNAUTHORIZED {
                        info!("retrying {method} {uri} after {status}");
                        last_err = Some(common::parse_error_from_body(
                            method.as_str(),
                            uri,
                            status.as_u16(),
                            &[],
                        ));
                        relogin = true;
                    } else if status.as_u16() == 419 || status.is_server_error() {
                        info!("retrying {method} {uri} after {status}");
                        last_err = Some(common::parse_error_from_body(
                            method.as_str(),
                            uri,
                            status.as_u16(),
                            &[],
                        ));
                    } else {
                        return Ok(resp);
                    }
                }
            }
            if !self.status_check_disabled {
                if !self.check_controller_status().await? {
                    warn!("controller did not come back up, giving up on {method} {uri}");
                    return Err(last_err.unwrap_or(Error::RetriesExhausted {
                        verb: method.to_string(),
                        uri: uri.to_string(),
                        attempts: attempt + 1,
                    }));
                }
                relogin = true;
            }
            if relogin {
                self.login().await?;
            }
            attempt += 1;
        }
    }

    /// Reads a success body; 204 yields `None`, non-2xx becomes an API error.
    pub(crate) async fn read_body(
        &self,
        verb: &str,
        uri: &str,
        resp: Response,
    ) -> Result<Option<Vec<u8>>, Error> {
        let status = resp.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let body = self.response_bytes(resp).await?;
        if !status.is_success() {
            return Err(common::parse_error_from_body(
                verb,
                uri,
                status.as_u16(),
                &body,
            ));
        }
        Ok(Some(body))
    }

    pub(crate) async fn response_bytes(&self, resp: Response) -> Result<Vec<u8>, Error> {
        Ok(resp.bytes().await?.to_vec())
    }

    pub(crate) fn join_url(&self, uri: &str) -> Result<Url, Error> {
        self.base_url.join(uri).map_err(Error::from)
    }

    /// Headers common to every controller request. Session cookies and the
    /// CSRF token are never attached to the login exchange itself.
    pub(crate) fn decorated_headers(
        &self,
        tenant: Option<&str>,
        is_login: bool,
    ) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("x-avi-version"),
            HeaderValue::from_str(&self.version)
                .map_err(|e| Error::Config(format!("invalid api version: {e}")))?,
        );
        let tenant = tenant.unwrap_or(&self.tenant);
        headers.insert(
            HeaderName::from_static("x-avi-tenant"),
            HeaderValue::from_str(tenant)
                .map_err(|e| Error::Config(format!("invalid tenant: {e}")))?,
        );
        headers.insert(
            REFERER,
            HeaderValue::from_str(self.base_url.as_str())
                .map_err(|e| Error::Config(format!("invalid referer: {e}")))?,
        );
        for (name, value) in self.user_headers.iter() {
            headers.insert(name.clone(), value.clone());
        }
        let state = self.lock_state();
        if !state.csp_access_token.is_empty() {
            let bearer = format!("Bearer {}", state.csp_access_token);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&bearer)
                    .map_err(|e| Error::Auth(format!("invalid csp access token: {e}")))?,
            );
        }
        if !is_login {
            let mut cookies = Vec::new();
            if !state.csrf_token.is_empty() {
                headers.insert(
                    HeaderName::from_static("x-csrftoken"),
                    HeaderValue::from_str(&state.csrf_token)
                        .map_err(|e| Error::Auth(format!("invalid csrf token: {e}")))?,
                );
                cookies.push(format!("csrftoken={}", state.csrf_token));
            }
            if !state.session_id.is_empty() {
                cookies.push(format!("sessionid={}", state.session_id));
                cookies.push(format!("avi-sessionid={}", state.session_id));
            }
            if !cookies.is_empty() {
                headers.insert(
                    COOKIE,
                    HeaderValue::from_str(&cookies.join("; "))
                        .map_err(|e| Error::Auth(format!("invalid session cookie: {e}")))?,
                );
            }
        }
        Ok(headers)
    }

    /// Harvests the CSRF and session cookies from a login response. Both
    /// must be present for the session state to change.
    fn collect_cookies(&self, resp: &Response) {
        let mut csrf_token = None;
        let mut session_id = None;
        for value in resp.headers().get_all(SET_COOKIE) {
            let Ok(raw) = value.to_str() else {
                continue;
            };
            let Some((name, cookie_value)) = raw.split(';').next().and_then(|nv| nv.split_once('='))
            else {
                continue;
            };
            match name.trim() {
                "csrftoken" => csrf_token = Some(cookie_value.to_string()),
                "sessionid" | "avi-sessionid" => session_id = Some(cookie_value.to_string()),
                _ => {}
            }
        }
        if let (Some(csrf_token), Some(session_id)) = (csrf_token, session_id) {
            let mut state = self.lock_state_mut();
            state.csrf_token = csrf_token;
            state.session_id = session_id;
        }
    }

    fn lock_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_state_mut(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
