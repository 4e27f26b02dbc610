use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

use crate::error::Error;
use crate::models::{
    AnalyticsProfile, ApplicationProfile, Cloud, ControllerProperties, Gslb, GslbService,
    HealthMonitor, Pool, PoolGroup, ServiceEngineGroup, SslKeyAndCertificate, SslProfile,
    SystemConfiguration, Tenant, VirtualService, VsVip,
};
use crate::session::{ApiOptions, AviSession, PatchOp};

/// A controller config object with its own REST collection.
pub trait AviObject: Serialize + DeserializeOwned + Send + Sync {
    /// Object name in the REST path, e.g. `virtualservice`.
    const OBJECT_NAME: &'static str;

    /// Server-assigned identity, when the object has been persisted.
    fn uuid(&self) -> Option<&str>;
}

macro_rules! avi_object {
    ($type:ty, $name:literal) => {
        impl AviObject for $type {
            const OBJECT_NAME: &'static str = $name;

            fn uuid(&self) -> Option<&str> {
                self.uuid.as_deref()
            }
        }
    };
}

avi_object!(VirtualService, "virtualservice");
avi_object!(VsVip, "vsvip");
avi_object!(Pool, "pool");
avi_object!(PoolGroup, "poolgroup");
avi_object!(HealthMonitor, "healthmonitor");
avi_object!(ApplicationProfile, "applicationprofile");
avi_object!(AnalyticsProfile, "analyticsprofile");
avi_object!(SslProfile, "sslprofile");
avi_object!(SslKeyAndCertificate, "sslkeyandcertificate");
avi_object!(Cloud, "cloud");
avi_object!(ServiceEngineGroup, "serviceenginegroup");
avi_object!(Tenant, "tenant");
avi_object!(Gslb, "gslb");
avi_object!(GslbService, "gslbservice");

/// CRUD surface for one object type, borrowed from a session.
pub struct ResourceClient<'a, T> {
    session: &'a AviSession,
    _marker: PhantomData<T>,
}

impl<'a, T: AviObject> ResourceClient<'a, T> {
    fn api_path(uuid: Option<&str>) -> String {
        match uuid {
            Some(uuid) => format!("api/{}/{}", T::OBJECT_NAME, uuid),
            None => format!("api/{}", T::OBJECT_NAME),
        }
    }

    /// Lists every object of this type visible to the session tenant.
    pub async fn get_all(&self) -> Result<Vec<T>, Error> {
        self.get_all_with_options(&ApiOptions::default()).await
    }

    pub async fn get_all_with_options(&self, options: &ApiOptions) -> Result<Vec<T>, Error> {
        self.session
            .get_collection(&Self::api_path(None), options)
            .await
    }

    /// Fetches one object by uuid.
    pub async fn get(&self, uuid: &str) -> Result<T, Error> {
        self.get_with_options(uuid, &ApiOptions::default()).await
    }

    pub async fn get_with_options(&self, uuid: &str, options: &ApiOptions) -> Result<T, Error> {
        self.session
            .get_with_options(&Self::api_path(Some(uuid)), options)
            .await
    }

    /// Fetches one object by name; zero or multiple matches are errors.
    pub async fn get_by_name(&self, name: &str) -> Result<T, Error> {
        self.get_by_name_with_options(name, &ApiOptions::default())
            .await
    }

    pub async fn get_by_name_with_options(
        &self,
        name: &str,
        options: &ApiOptions,
    ) -> Result<T, Error> {
        self.session
            .get_object_by_name(T::OBJECT_NAME, name, options)
            .await
    }

    /// Fetches one object by arbitrary lookup filters.
    pub async fn get_object(&self, options: &ApiOptions) -> Result<T, Error> {
        self.session.get_object(T::OBJECT_NAME, options).await
    }

    /// Creates the object and returns the persisted form.
    pub async fn create(&self, obj: &T) -> Result<T, Error> {
        self.create_with_options(obj, &ApiOptions::default()).await
    }

    pub async fn create_with_options(&self, obj: &T, options: &ApiOptions) -> Result<T, Error> {
        self.session
            .post_with_options(&Self::api_path(None), obj, options)
            .await?
            .ok_or_else(|| {
                Error::Lookup(format!(
                    "controller returned no body creating {}",
                    T::OBJECT_NAME
                ))
            })
    }

    /// Replaces the persisted object; the uuid must already be set.
    pub async fn update(&self, obj: &T) -> Result<T, Error> {
        self.update_with_options(obj, &ApiOptions::default()).await
    }

    pub async fn update_with_options(&self, obj: &T, options: &ApiOptions) -> Result<T, Error> {
        let uuid = obj.uuid().ok_or_else(|| {
            Error::Config(format!("updating a {} requires its uuid", T::OBJECT_NAME))
        })?;
        self.session
            .put_with_options(&Self::api_path(Some(uuid)), obj, options)
            .await?
            .ok_or_else(|| {
                Error::Lookup(format!(
                    "controller returned no body updating {}",
                    T::OBJECT_NAME
                ))
            })
    }

    /// Applies a partial modification to the object at `uuid`.
    pub async fn patch<P: Serialize>(
        &self,
        uuid: &str,
        op: PatchOp,
        payload: &P,
    ) -> Result<Option<T>, Error> {
        self.patch_with_options(uuid, op, payload, &ApiOptions::default())
            .await
    }

    pub async fn patch_with_options<P: Serialize>(
        &self,
        uuid: &str,
        op: PatchOp,
        payload: &P,
        options: &ApiOptions,
    ) -> Result<Option<T>, Error> {
        self.session
            .patch_with_options(&Self::api_path(Some(uuid)), op, payload, options)
            .await
    }

    /// Deletes the object at `uuid`.
    pub async fn delete(&self, uuid: &str) -> Result<(), Error> {
        self.delete_with_options(uuid, &ApiOptions::default()).await
    }

    pub async fn delete_with_options(&self, uuid: &str, options: &ApiOptions) -> Result<(), Error> {
        self.session
            .delete_with_options(&Self::api_path(Some(uuid)), options)
            .await
    }

    /// Resolves `name` and deletes the match; lookup errors (including an
    /// ambiguous name) propagate unchanged.
    pub async fn delete_by_name(&self, name: &str) -> Result<(), Error> {
        self.delete_by_name_with_options(name, &ApiOptions::default())
            .await
    }

    pub async fn delete_by_name_with_options(
        &self,
        name: &str,
        options: &ApiOptions,
    ) -> Result<(), Error> {
        let obj = self.get_by_name_with_options(name, options).await?;
        let uuid = obj.uuid().ok_or_else(|| {
            Error::Lookup(format!(
                "{} named {name} carries no uuid",
                T::OBJECT_NAME
            ))
        })?;
        self.delete_with_options(uuid, options).await
    }
}

impl AviSession {
    /// Typed client for any [`AviObject`] type.
    pub fn resource<T: AviObject>(&self) -> ResourceClient<'_, T> {
        ResourceClient {
            session: self,
            _marker: PhantomData,
        }
    }

    pub fn virtual_service(&self) -> ResourceClient<'_, VirtualService> {
        self.resource()
    }

    pub fn vs_vip(&self) -> ResourceClient<'_, VsVip> {
        self.resource()
    }

    pub fn pool(&self) -> ResourceClient<'_, Pool> {
        self.resource()
    }

    pub fn pool_group(&self) -> ResourceClient<'_, PoolGroup> {
        self.resource()
    }

    pub fn health_monitor(&self) -> ResourceClient<'_, HealthMonitor> {
        self.resource()
    }

    pub fn application_profile(&self) -> ResourceClient<'_, ApplicationProfile> {
        self.resource()
    }

    pub fn analytics_profile(&self) -> ResourceClient<'_, AnalyticsProfile> {
        self.resource()
    }

    pub fn ssl_profile(&self) -> ResourceClient<'_, SslProfile> {
        self.resource()
    }

    pub fn ssl_key_and_certificate(&self) -> ResourceClient<'_, SslKeyAndCertificate> {
        self.resource()
    }

    pub fn cloud(&self) -> ResourceClient<'_, Cloud> {
        self.resource()
    }

    pub fn service_engine_group(&self) -> ResourceClient<'_, ServiceEngineGroup> {
        self.resource()
    }

    pub fn tenant_client(&self) -> ResourceClient<'_, Tenant> {
        self.resource()
    }

    pub fn gslb(&self) -> ResourceClient<'_, Gslb> {
        self.resource()
    }

    pub fn gslb_service(&self) -> ResourceClient<'_, GslbService> {
        self.resource()
    }

    /// The system configuration is a singleton; no uuid in its path.
    pub async fn get_system_configuration(&self) -> Result<SystemConfiguration, Error> {
        self.get("api/systemconfiguration").await
    }

    pub async fn put_system_configuration(
        &self,
        config: &SystemConfiguration,
    ) -> Result<Option<SystemConfiguration>, Error> {
        self.put("api/systemconfiguration", config).await
    }

    /// Controller properties form a singleton as well.
    pub async fn get_controller_properties(&self) -> Result<ControllerProperties, Error> {
        self.get("api/controllerproperties").await
    }

    pub async fn put_controller_properties(
        &self,
        properties: &ControllerProperties,
    ) -> Result<Option<ControllerProperties>, Error> {
        self.put("api/controllerproperties", properties).await
    }
}
