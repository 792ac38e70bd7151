//! Typed resource handles
//!
//! A handle pairs a URL template with its route-parameter bindings and a
//! transport clone. Construction performs no I/O; requests are issued only
//! when one of the CRUD methods is called. Handles are independently owned:
//! two handles built from equal inputs share nothing but the connection pool.

use crate::resource::{ResourceClient, ResourceResult, RouteParams, UrlTemplate};
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// A CRUD-capable handle over one entity or its collection
pub struct ResourceHandle<T> {
    template: UrlTemplate,
    params: RouteParams,
    client: ResourceClient,
    _payload: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceHandle<T> {
    fn clone(&self) -> Self {
        Self {
            template: self.template.clone(),
            params: self.params.clone(),
            client: self.client.clone(),
            _payload: PhantomData,
        }
    }
}

impl<T> ResourceHandle<T> {
    pub fn new(template: UrlTemplate, params: RouteParams, client: ResourceClient) -> Self {
        Self {
            template,
            params,
            client,
            _payload: PhantomData,
        }
    }

    /// The template this handle was bound with, base prefix included
    pub fn url_template(&self) -> &UrlTemplate {
        &self.template
    }

    /// The effective value of one route parameter, `None` when unbound
    pub fn route_param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// The URL requests from this handle will target
    pub fn render_url(&self) -> String {
        self.template.render(&self.params)
    }
}

impl<T> ResourceHandle<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Fetch the bound entity
    pub async fn get(&self) -> ResourceResult<T> {
        let body = self
            .client
            .execute(Method::GET, &self.render_url(), None)
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// List the entity collection
    pub async fn query(&self) -> ResourceResult<Vec<T>> {
        let body = self
            .client
            .execute(Method::GET, &self.render_url(), None)
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Create or replace the entity, returning the backend's view of it
    pub async fn save(&self, value: &T) -> ResourceResult<T> {
        let payload = serde_json::to_vec(value)?;
        let body = self
            .client
            .execute(Method::POST, &self.render_url(), Some(payload.into()))
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Delete the bound entity
    pub async fn remove(&self) -> ResourceResult<()> {
        self.client
            .execute(Method::DELETE, &self.render_url(), None)
            .await?;
        Ok(())
    }
}
