//! Resource factory for the scheduler backend's `apps` entity
//!
//! The factory is the crate's front door: given an optional [`AppId`], it
//! returns a [`ResourceHandle`] bound to `{base}/v_beta/apps/:appId`. The
//! base URL is read from a [`BaseUrlSource`] on every call, so configuration
//! completed before first use is honored. The factory itself is stateless,
//! performs no I/O, and raises no errors; a misconfigured base surfaces from
//! the transport when a request is actually issued.

pub mod models;

use crate::config::{BackendSettings, SharedSettings};
use crate::resource::{ResourceClient, ResourceHandle, RouteParams, UrlTemplate};
use models::App;
use nutype::nutype;
use std::sync::Arc;

/// Versioned path prefix of the backend API
pub const API_BASE_PATH: &str = "/v_beta";

/// Route parameter naming the bound app in the template
pub const APP_ID_PARAM: &str = "appId";

/// Identifier of an app registered with the scheduler
///
/// Not sanitized: the bound route value must stay byte-identical to what
/// the caller constructed.
#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRef, TryFrom)
)]
pub struct AppId(String);

/// Options recognized by [`AppResourceFactory::app`]
///
/// Absent options and empty options behave identically; `app_id` is the
/// single recognized field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppParams {
    pub app_id: Option<AppId>,
}

impl AppParams {
    pub fn with_app_id(app_id: AppId) -> Self {
        Self {
            app_id: Some(app_id),
        }
    }
}

/// Where the factory reads the backend base URL on each call
pub trait BaseUrlSource: Send + Sync {
    fn default_base(&self) -> String;
}

impl BaseUrlSource for BackendSettings {
    fn default_base(&self) -> String {
        self.default_base.clone()
    }
}

impl BaseUrlSource for SharedSettings {
    fn default_base(&self) -> String {
        SharedSettings::default_base(self)
    }
}

impl<S: BaseUrlSource + ?Sized> BaseUrlSource for Arc<S> {
    fn default_base(&self) -> String {
        (**self).default_base()
    }
}

/// Factory producing typed handles for the `apps` entity
pub struct AppResourceFactory<S = SharedSettings> {
    base: S,
    client: ResourceClient,
}

impl<S: BaseUrlSource> AppResourceFactory<S> {
    pub fn new(base: S, client: ResourceClient) -> Self {
        Self { base, client }
    }

    /// Produce a handle for one app, or for the collection when no
    /// identifier is supplied.
    ///
    /// Each call reads the live base URL, builds a fresh template, and
    /// returns an independently owned handle; two calls with equal inputs
    /// and equal configuration yield handles with equal effective bindings.
    pub fn app(&self, params: Option<AppParams>) -> ResourceHandle<App> {
        let AppParams { app_id } = params.unwrap_or_default();

        let template = UrlTemplate::new(format!(
            "{}{API_BASE_PATH}/apps/:{APP_ID_PARAM}",
            self.base.default_base()
        ));
        let route = RouteParams::new().bind(APP_ID_PARAM, app_id.map(AppId::into_inner));

        ResourceHandle::new(template, route, self.client.clone())
    }
}

impl AppResourceFactory<SharedSettings> {
    /// Wire a factory from loaded settings
    pub fn from_settings(settings: &crate::config::Settings) -> Self {
        Self::new(
            SharedSettings::new(settings.backend.clone()),
            ResourceClient::new(&settings.http),
        )
    }
}
