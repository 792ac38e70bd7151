//! HTTP transport shared by resource handles
//!
//! Wraps a pooled hyper client with the request timeout and response size
//! limit from [`HttpSettings`]. One client is built per process and cloned
//! into each handle; clones share the underlying connection pool.

use crate::config::HttpSettings;
use crate::resource::{ResourceError, ResourceResult};
use bytes::Bytes;
use http::{header, Method, Request, Uri};
use http_body_util::{BodyExt, Full};
use tracing::debug;

type HttpClient = hyper_util::client::legacy::Client<
    hyper_util::client::legacy::connect::HttpConnector,
    Full<Bytes>,
>;

/// Transport for a family of resource handles
#[derive(Clone)]
pub struct ResourceClient {
    client: HttpClient,
    request_timeout: std::time::Duration,
    max_response_bytes: usize,
}

impl ResourceClient {
    pub fn new(settings: &HttpSettings) -> Self {
        let client =
            hyper_util::client::legacy::Client::builder(hyper_util::rt::TokioExecutor::new())
                .build_http();

        Self {
            client,
            request_timeout: std::time::Duration::from_millis(settings.request_timeout_ms),
            max_response_bytes: settings.max_response_bytes,
        }
    }

    /// Issue a request to a rendered URL and collect the response body.
    ///
    /// Non-2xx statuses are reported as [`ResourceError::Status`] with the
    /// body passed through untransformed.
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Bytes>,
    ) -> ResourceResult<Bytes> {
        let uri: Uri = url
            .parse()
            .map_err(|_| ResourceError::InvalidUri(url.to_string()))?;

        debug!(%method, %uri, "issuing backend request");

        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder.body(Full::new(body.unwrap_or_default()))?;

        let response = tokio::time::timeout(self.request_timeout, self.client.request(request))
            .await
            .map_err(|_| ResourceError::Timeout(self.request_timeout))?
            .map_err(|e| ResourceError::Connect(e.to_string()))?;

        let status = response.status();
        let body = http_body_util::Limited::new(response.into_body(), self.max_response_bytes)
            .collect()
            .await
            .map_err(|e| {
                if e.is::<http_body_util::LengthLimitError>() {
                    ResourceError::ResponseTooLarge {
                        max: self.max_response_bytes,
                    }
                } else {
                    ResourceError::Connect(format!("Body collection error: {e}"))
                }
            })?
            .to_bytes();

        if !status.is_success() {
            debug!(%status, "backend request failed");
            return Err(ResourceError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }
}

impl Default for ResourceClient {
    fn default() -> Self {
        Self::new(&HttpSettings::default())
    }
}
