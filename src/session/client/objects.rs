use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::form_urlencoded;

use crate::error::Error;
use crate::session::common::{self, CollectionResult, PatchOp};
use crate::session::options::ApiOptions;

use super::AviSession;

fn with_params(uri: &str, options: &ApiOptions) -> String {
    let extras = options.extra_pairs();
    if extras.is_empty() {
        return uri.to_string();
    }
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &extras {
        query.append_pair(key, value);
    }
    let separator = if uri.contains('?') { '&' } else { '?' };
    format!("{uri}{separator}{}", query.finish())
}

impl AviSession {
    /// Deserialize a success body into `T`; a 204 (no body) yields `None`.
    async fn json_or_empty<T: DeserializeOwned>(
        &self,
        verb: &str,
        uri: &str,
        resp: reqwest::Response,
    ) -> Result<Option<T>, Error> {
        match self.read_body(verb, uri, resp).await? {
            None => Ok(None),
            Some(body) => serde_json::from_slice(&body)
                .map(Some)
                .map_err(Error::from),
        }
    }

    /// GET `uri` and deserialize the response body.
    pub async fn get<T: DeserializeOwned>(&self, uri: &str) -> Result<T, Error> {
        self.get_with_options(uri, &ApiOptions::default()).await
    }

    pub async fn get_with_options<T: DeserializeOwned>(
        &self,
        uri: &str,
        options: &ApiOptions,
    ) -> Result<T, Error> {
        let uri = with_params(uri, options);
        let resp = self
            .send_with_retries(Method::GET, &uri, None, options.tenant.as_deref())
            .await?;
        // A 204 deserializes as JSON null.
        let body = self
            .read_body("GET", &uri, resp)
            .await?
            .unwrap_or_else(|| b"null".to_vec());
        serde_json::from_slice(&body).map_err(Error::from)
    }

    /// GET `uri` and return the raw response body.
    pub async fn get_raw(&self, uri: &str, options: &ApiOptions) -> Result<Vec<u8>, Error> {
        let uri = with_params(uri, options);
        let resp = self
            .send_with_retries(Method::GET, &uri, None, options.tenant.as_deref())
            .await?;
        Ok(self.read_body("GET", &uri, resp).await?.unwrap_or_default())
    }

    /// POST `payload` to `uri`; `None` when the controller returns no body.
    pub async fn post<P: Serialize, T: DeserializeOwned>(
        &self,
        uri: &str,
        payload: &P,
    ) -> Result<Option<T>, Error> {
        self.post_with_options(uri, payload, &ApiOptions::default())
            .await
    }

    pub async fn post_with_options<P: Serialize, T: DeserializeOwned>(
        &self,
        uri: &str,
        payload: &P,
        options: &ApiOptions,
    ) -> Result<Option<T>, Error> {
        let uri = with_params(uri, options);
        let body = serde_json::to_value(payload)?;
        let resp = self
            .send_with_retries(
                Method::POST,
                &uri,
                Some(&body),
                options.tenant.as_deref(),
            )
            .await?;
        self.json_or_empty("POST", &uri, resp).await
    }

    pub async fn post_raw<P: Serialize>(
        &self,
        uri: &str,
        payload: &P,
        options: &ApiOptions,
    ) -> Result<Vec<u8>, Error> {
        let uri = with_params(uri, options);
        let body = serde_json::to_value(payload)?;
        let resp = self
            .send_with_retries(
                Method::POST,
                &uri,
                Some(&body),
                options.tenant.as_deref(),
            )
            .await?;
        Ok(self.read_body("POST", &uri, resp).await?.unwrap_or_default())
    }

    /// PUT `payload` to `uri`; `None` when the controller returns no body.
    pub async fn put<P: Serialize, T: DeserializeOwned>(
        &self,
        uri: &str,
        payload: &P,
    ) -> Result<Option<T>, Error> {
        self.put_with_options(uri, payload, &ApiOptions::default())
            .await
    }

    pub async fn put_with_options<P: Serialize, T: DeserializeOwned>(
        &self,
        uri: &str,
        payload: &P,
        options: &ApiOptions,
    ) -> Result<Option<T>, Error> {
        let uri = with_params(uri, options);
        let body = serde_json::to_value(payload)?;
        let resp = self
            .send_with_retries(
                Method::PUT,
                &uri,
                Some(&body),
                options.tenant.as_deref(),
            )
            .await?;
        self.json_or_empty("PUT", &uri, resp).await
    }

    pub async fn put_raw<P: Serialize>(
        &self,
        uri: &str,
        payload: &P,
        options: &ApiOptions,
    ) -> Result<Vec<u8>, Error> {
        let uri = with_params(uri, options);
        let body = serde_json::to_value(payload)?;
        let resp = self
            .send_with_retries(
                Method::PUT,
                &uri,
                Some(&body),
                options.tenant.as_deref(),
            )
            .await?;
        Ok(self.read_body("PUT", &uri, resp).await?.unwrap_or_default())
    }

    /// PATCH `uri` with `{ "<op>": payload }`.
    pub async fn patch<P: Serialize, T: DeserializeOwned>(
        &self,
        uri: &str,
        op: PatchOp,
        payload: &P,
    ) -> Result<Option<T>, Error> {
        self.patch_with_options(uri, op, payload, &ApiOptions::default())
            .await
    }

    pub async fn patch_with_options<P: Serialize, T: DeserializeOwned>(
        &self,
        uri: &str,
        op: PatchOp,
        payload: &P,
        options: &ApiOptions,
    ) -> Result<Option<T>, Error> {
        let uri = with_params(uri, options);
        let body = common::patch_envelope(op, payload)?;
        let resp = self
            .send_with_retries(
                Method::PATCH,
                &uri,
                Some(&body),
                options.tenant.as_deref(),
            )
            .await?;
        self.json_or_empty("PATCH", &uri, resp).await
    }

    /// DELETE `uri`.
    pub async fn delete(&self, uri: &str) -> Result<(), Error> {
        self.delete_with_options(uri, &ApiOptions::default()).await
    }

    pub async fn delete_with_options(&self, uri: &str, options: &ApiOptions) -> Result<(), Error> {
        let uri = with_params(uri, options);
        let resp = self
            .send_with_retries(Method::DELETE, &uri, None, options.tenant.as_deref())
            .await?;
        self.read_body("DELETE", &uri, resp).await?;
        Ok(())
    }

    /// GET a collection endpoint and return its raw envelope.
    ///
    /// Cluster queries return a bare object instead of an envelope; these are
    /// wrapped as a single raw result.
    pub async fn get_collection_raw(
        &self,
        uri: &str,
        options: &ApiOptions,
    ) -> Result<CollectionResult, Error> {
        let uri = with_params(uri, options);
        let resp = self
            .send_with_retries(Method::GET, &uri, None, options.tenant.as_deref())
            .await?;
        let body = self.read_body("GET", &uri, resp).await?.unwrap_or_default();
        if body.is_empty() {
            return Ok(CollectionResult {
                count: 0,
                results: serde_json::Value::Null,
                next: None,
            });
        }
        if uri.contains("cluster?") {
            let results: serde_json::Value = serde_json::from_slice(&body)?;
            return Ok(CollectionResult {
                count: 1,
                results,
                next: None,
            });
        }
        serde_json::from_slice(&body).map_err(Error::from)
    }

    /// GET a collection endpoint and deserialize its results.
    pub async fn get_collection<T: DeserializeOwned>(
        &self,
        uri: &str,
        options: &ApiOptions,
    ) -> Result<Vec<T>, Error> {
        let result = self.get_collection_raw(uri, options).await?;
        if result.count == 0 {
            return Ok(Vec::new());
        }
        serde_json::from_value(result.results).map_err(Error::from)
    }

    /// Builds the lookup URI for an object type from the options filters.
    pub fn get_uri(&self, obj_type: &str, options: &ApiOptions) -> Result<String, Error> {
        if options.name.is_none() {
            return Err(Error::Lookup("name not specified".to_string()));
        }
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in options.lookup_pairs() {
            query.append_pair(key, &value);
        }
        for (key, value) in options.extra_pairs() {
            query.append_pair(&key, &value);
        }
        Ok(format!("api/{obj_type}?{}", query.finish()))
    }

    /// Looks an object up by the options filters; exactly one match is
    /// required.
    pub async fn get_object<T: DeserializeOwned>(
        &self,
        obj_type: &str,
        options: &ApiOptions,
    ) -> Result<T, Error> {
        let uri = self.get_uri(obj_type, options)?;
        let resp = self
            .send_with_retries(Method::GET, &uri, None, options.tenant.as_deref())
            .await?;
        let body = self.read_body("GET", &uri, resp).await?.unwrap_or_default();
        let name = options.name.as_deref().unwrap_or_default();
        if body.is_empty() {
            return Err(Error::Lookup(format!(
                "no object of type {obj_type} with name {name} found"
            )));
        }
        if uri.contains("cluster?") {
            return serde_json::from_slice(&body).map_err(Error::from);
        }
        let result: CollectionResult = serde_json::from_slice(&body)?;
        match result.count {
            0 => Err(Error::Lookup(format!(
                "no object of type {obj_type} with name {name} found"
            ))),
            1 => {
                let mut items: Vec<serde_json::Value> = serde_json::from_value(result.results)?;
                let first = items.drain(..).next().ok_or_else(|| {
                    Error::Lookup(format!(
                        "no object of type {obj_type} with name {name} found"
                    ))
                })?;
                serde_json::from_value(first).map_err(Error::from)
            }
            _ => Err(Error::Lookup(format!(
                "more than one object of type {obj_type} with name {name} found"
            ))),
        }
    }

    /// Looks an object up by name.
    pub async fn get_object_by_name<T: DeserializeOwned>(
        &self,
        obj_type: &str,
        name: &str,
        options: &ApiOptions,
    ) -> Result<T, Error> {
        let options = options.clone().name(name);
        self.get_object(obj_type, &options).await
    }

    /// Reads the software version from the controller's initial data.
    pub async fn get_controller_version(&self) -> Result<String, Error> {
        let data: serde_json::Value = self.get("api/initial-data").await?;
        data.get("version")
            .and_then(|version| version.get("Version"))
            .and_then(|version| version.as_str())
            .map(|version| version.to_string())
            .ok_or_else(|| Error::Lookup("initial-data response carried no version".to_string()))
    }
}
