//! libcurl-backed transport.
//!
//! One `Easy` handle per request. Redirects are not followed: the plugin
//! signals success with 204 and anything else is reported back verbatim.

use super::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use std::time::Duration;

/// Optional timeouts; `None` leaves libcurl's defaults (no overall timeout).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurlOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    options: CurlOptions,
}

impl CurlTransport {
    pub fn new(options: CurlOptions) -> Self {
        Self { options }
    }

    fn perform(&self, request: &HttpRequest) -> Result<HttpResponse, curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&request.url)?;
        easy.follow_location(false)?;
        if let Some(d) = self.options.connect_timeout {
            easy.connect_timeout(d)?;
        }
        if let Some(d) = self.options.timeout {
            easy.timeout(d)?;
        }

        if let Some(payload) = &request.body {
            easy.post_fields_copy(payload)?;
        }
        match request.method {
            Method::Get => easy.get(true)?,
            Method::Post if request.body.is_some() => {}
            Method::Post | Method::Delete => easy.custom_request(request.method.as_str())?,
        }

        // Build curl list for headers ("Name: value").
        let mut list = curl::easy::List::new();
        for (k, v) in &request.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !request.headers.is_empty() {
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(HttpResponse { status, body })
    }
}

impl Transport for CurlTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.perform(request).map_err(|source| TransportError::Curl {
            method: request.method,
            url: request.url.clone(),
            source,
        })?;
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status = response.status,
            bytes = response.body.len(),
            "response received"
        );
        Ok(response)
    }
}
