//! Generic REST resource layer
//!
//! A resource is addressed by a URL template with `:name` route parameters.
//! Binding parameter values to a template yields a [`handle::ResourceHandle`]
//! that issues CRUD-style HTTP calls through a shared [`client::ResourceClient`].
//! Nothing in this layer retries, caches, or authenticates; backend failures
//! surface to the caller untransformed.

pub mod client;
pub mod handle;
pub mod template;

pub use client::ResourceClient;
pub use handle::ResourceHandle;
pub use template::{RouteParams, UrlTemplate};

use http::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Errors produced while issuing a resource request
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] http::Error),

    #[error("Invalid request URI: {0}")]
    InvalidUri(String),

    #[error("Connection error: {0}")]
    Connect(String),

    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    #[error("Response too large (max: {max} bytes)")]
    ResponseTooLarge { max: usize },

    #[error("Backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for resource operations
pub type ResourceResult<T> = Result<T, ResourceError>;
