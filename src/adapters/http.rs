//! HTTP transport over `reqwest`'s blocking client
//!
//! Implements `Transport` with one attempt per call. Any status code is a
//! response; only failures to get a response become `TransportError`.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;

use crate::core::ports::{
    HttpResponse, RequestBody, RequestOptions, Transport, TransportError, USER_AGENT,
};

/// Blocking `reqwest` transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the guardian's client label
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {e}"))?;
        Ok(Self { client })
    }

    fn send(request: RequestBuilder, options: &RequestOptions) -> Result<HttpResponse, TransportError> {
        let request = options
            .headers
            .iter()
            .fold(request.timeout(options.timeout), |req, (name, value)| req.header(name, value));

        let response = request.send().map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        // A body that cannot be read still leaves a usable status
        let body = response.text().unwrap_or_default();
        Ok(HttpResponse::new(status, body))
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse, TransportError> {
        Self::send(self.client.get(url), options)
    }

    fn post(
        &self,
        url: &str,
        options: &RequestOptions,
        body: Option<&RequestBody>,
    ) -> Result<HttpResponse, TransportError> {
        let request = self.client.post(url);
        let request = match body {
            Some(RequestBody::Json(value)) => request.json(value),
            Some(RequestBody::Bytes(bytes)) => request.body(bytes.clone()),
            None => request.header(CONTENT_TYPE, "application/json"),
        };
        Self::send(request, options)
    }
}
