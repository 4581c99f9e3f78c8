//! HTTP transport for the Hipay gateway
//!
//! Every gateway call goes through [`HttpTransport::execute`], which sends a
//! single request, decodes the JSON body and turns a non-success gateway code
//! into [`HipayError::Api`].

use crate::config::HipayConfig;
use crate::types::ResponseStatus;
use crate::{HipayError, Result};
use http::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use http::{Method, StatusCode};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use url::Url;

/// Hook invoked on every outgoing request before it is sent.
///
/// Useful for adding correlation headers or recording calls in tests.
#[async_trait::async_trait]
pub trait RequestHook: Send + Sync {
    async fn on_request(
        &self,
        method: &Method,
        url: &Url,
        builder: RequestBuilder,
    ) -> RequestBuilder;
}

/// Authenticated JSON transport bound to one gateway endpoint
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
    headers: HeaderMap,
    request_hook: Option<Arc<dyn RequestHook>>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("request_hook", &self.request_hook.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

impl HttpTransport {
    /// Create a transport from a validated configuration
    pub fn new(config: &HipayConfig) -> Result<Self> {
        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| HipayError::config(format!("Failed to create HTTP client: {}", e)))?;

        Self::with_client(config, client)
    }

    /// Create a transport on top of an existing reqwest client
    pub fn with_client(config: &HipayConfig, client: Client) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|e| HipayError::config(format!("Invalid token: {}", e)))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            base_url: config.endpoint.clone(),
            client,
            headers,
            request_hook: None,
        })
    }

    /// Install a hook that sees every request before it is sent
    pub fn with_request_hook(mut self, request_hook: Arc<dyn RequestHook>) -> Self {
        self.request_hook = Some(request_hook);
        self
    }

    /// Base URL of the gateway
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an operation path
    pub fn url(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| HipayError::config(format!("Invalid endpoint URL: {e}")))
    }

    /// URL of a single resource below `path`, with `query` appended.
    ///
    /// `id` is percent-encoded as one path segment.
    pub fn resource_url(&self, path: &str, id: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.url(path)?;
        url.path_segments_mut()
            .map_err(|_| HipayError::config("Endpoint URL cannot be a base"))?
            .pop_if_empty()
            .push(id);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// GET a resource and decode the gateway response
    pub async fn get<Res>(&self, url: Url) -> Result<Res>
    where
        Res: DeserializeOwned,
    {
        self.execute::<(), Res>(Method::GET, url, None).await
    }

    /// POST a JSON body and decode the gateway response
    pub async fn post<Req, Res>(&self, url: Url, body: &Req) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        self.execute(Method::POST, url, Some(body)).await
    }

    /// Send one request and decode a typed gateway response.
    ///
    /// A body whose `code` is not `1` is an error whatever the HTTP status.
    #[instrument(skip(self, method, url, body), fields(method = %method, path = url.path()))]
    pub async fn execute<Req, Res>(
        &self,
        method: Method,
        url: Url,
        body: Option<&Req>,
    ) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .headers(self.headers.clone());

        if let Some(body) = body {
            builder = builder.json(body);
        }

        if let Some(hook) = &self.request_hook {
            builder = hook.on_request(&method, &url, builder).await;
        }

        debug!("sending gateway request");
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "received gateway response");

        decode_response(status, text)
    }
}

/// Decode a response body, checking the gateway envelope before the payload
fn decode_response<Res>(status: StatusCode, text: String) -> Result<Res>
where
    Res: DeserializeOwned,
{
    let value: Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => return Err(transport_failure(status, text, e)),
    };

    let envelope = match ResponseStatus::deserialize(&value) {
        Ok(envelope) => envelope,
        Err(e) => return Err(transport_failure(status, text, e)),
    };

    if !envelope.is_success() {
        warn!(
            code = envelope.code,
            description = %envelope.description,
            details = envelope.details.len(),
            "gateway reported failure"
        );
        return Err(HipayError::api(
            envelope.code,
            envelope.description,
            envelope.details,
        ));
    }

    Ok(serde_json::from_value(value)?)
}

fn transport_failure(status: StatusCode, body: String, error: serde_json::Error) -> HipayError {
    if status.is_success() {
        HipayError::Json(error)
    } else {
        HipayError::Status {
            status: status.as_u16(),
            body,
        }
    }
}
