use log::{debug, error, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use std::path::Path;
use tokio::io::AsyncWriteExt;

use crate::error::Error;
use crate::session::common;
use crate::session::options::ApiOptions;

use super::AviSession;

impl AviSession {
    /// Uploads a local file to the controller file service at `uri`.
    ///
    /// The multipart form carries the file itself plus a `uri` field naming
    /// the destination as `controller://<path>`.
    pub async fn upload_file(
        &self,
        local_path: impl AsRef<Path>,
        uri: &str,
        options: &ApiOptions,
    ) -> Result<(), Error> {
        let local_path = local_path.as_ref();
        let data = tokio::fs::read(local_path).await?;
        let file_name = local_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        let upload_uri = format!("api/fileservice/{uri}");
        let url = self.join_url(&upload_uri)?;
        let controller_uri = format!("controller://{}", uri.split('?').next().unwrap_or(uri));

        let mut attempt: u32 = 0;
        let mut last_err: Option<Error> = None;
        loop {
            if attempt > 0 {
                if attempt >= self.max_api_retries {
                    error!("aborting upload of {file_name} after {attempt} attempts");
                    return Err(last_err.unwrap_or(Error::RetriesExhausted {
                        verb: "POST".to_string(),
                        uri: upload_uri,
                        attempts: attempt,
                    }));
                }
                tokio::time::sleep(self.api_retry_interval).await;
            }
            self.ensure_session().await?;
            let mut headers = self.decorated_headers(options.tenant.as_deref(), false)?;
            headers.remove(CONTENT_TYPE);
            let form = Form::new()
                .part(
                    "file",
                    Part::bytes(data.clone()).file_name(file_name.clone()),
                )
                .text("uri", controller_uri.clone());
            let mut relogin = false;
            match self
                .http
                .post(url.clone())
                .headers(headers)
                .multipart(form)
                .send()
                .await
            {
                Err(err) => {
                    error!("transport error uploading {file_name}: {err}");
                    last_err = Some(Error::Http(err));
                }
                Ok(resp) => {
                    let status = resp.status();
                    debug!("POST {upload_uri} -> {status}");
                    if status.is_success() {
                        if status == StatusCode::CREATED {
                            info!("file {file_name} uploaded to {controller_uri}");
                        }
                        return Ok(());
                    }
                    if status == StatusCode::UNAUTHORIZED {
                        last_err = Some(common::parse_error_from_body(
                            "POST",
                            &upload_uri,
                            status.as_u16(),
                            &[],
                        ));
                        relogin = true;
                    } else if status.as_u16() == 419 || status.is_server_error() {
                        last_err = Some(common::parse_error_from_body(
                            "POST",
                            &upload_uri,
                            status.as_u16(),
                            &[],
                        ));
                    } else {
                        let body = self.response_bytes(resp).await?;
                        return Err(common::parse_error_from_body(
                            "POST",
                            &upload_uri,
                            status.as_u16(),
                            &body,
                        ));
                    }
                }
            }
            if !self.status_check_disabled {
                if !self.check_controller_status().await? {
                    return Err(last_err.unwrap_or(Error::RetriesExhausted {
                        verb: "POST".to_string(),
                        uri: upload_uri,
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

    /// Downloads a controller file service object at `uri` into a local file.
    pub async fn download_file(
        &self,
        uri: &str,
        local_path: impl AsRef<Path>,
        options: &ApiOptions,
    ) -> Result<(), Error> {
        let download_uri = format!("api/fileservice/{uri}");
        let mut resp = self
            .send_with_retries(
                Method::GET,
                &download_uri,
                None,
                options.tenant.as_deref(),
            )
            .await?;
        let status = resp.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }
        if !status.is_success() {
            let body = self.response_bytes(resp).await?;
            return Err(common::parse_error_from_body(
                "GET",
                &download_uri,
                status.as_u16(),
                &body,
            ));
        }
        let mut file = tokio::fs::File::create(local_path.as_ref()).await?;
        while let Some(chunk) = resp.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        Ok(())
    }
}
