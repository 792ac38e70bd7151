//! Gangway - typed REST resource handles for an app-scheduler backend
//!
//! The crate's front door is [`apps::AppResourceFactory`]: given an optional
//! app identifier, it returns a handle bound to `{base}/v_beta/apps/:appId`
//! that issues CRUD-style calls when, and only when, the caller invokes them.
//! The generic template/handle/client layer underneath lives in [`resource`].

pub mod apps;
pub mod config;
pub mod error;
pub mod resource;

pub use apps::{AppId, AppParams, AppResourceFactory};
pub use error::{Error, Result};
