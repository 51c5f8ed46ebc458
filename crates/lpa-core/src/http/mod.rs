//! HTTP plumbing shared by mutations and searches.
//!
//! All requests leave the library through the [`Transport`] trait. The
//! production implementation is [`CurlTransport`] (libcurl via the curl
//! crate); tests substitute recording transports.

mod curl_transport;
mod form;

pub use curl_transport::{CurlOptions, CurlTransport};
pub use form::FormBody;

use std::fmt;

/// HTTP methods used against the plugin's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL (origin + path + optional query).
    pub url: String,
    /// Header name/value pairs, sent in order.
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Case-insensitive header lookup.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response handed back to callers; no status classification is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// 204 is the success signal of the plugin's mutation endpoints.
    pub fn is_no_content(&self) -> bool {
        self.status == 204
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to complete a request at the network level.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The joined URL left the page origin (e.g. a `//host` path).
    #[error("{url} is outside page origin {origin}")]
    CrossOrigin { url: String, origin: String },
    #[error("{method} {url} failed: {source}")]
    Curl {
        method: Method,
        url: String,
        #[source]
        source: curl::Error,
    },
}

/// Sends one request and returns the raw response.
///
/// Implementations must issue exactly one network request per call and must
/// not retry.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Resolves an absolute path (`/...`, optionally with a query) against a page origin.
///
/// The result must stay on `origin`; a path that joins to another host is an error.
pub fn resolve_url(origin: &url::Url, path: &str) -> Result<String, TransportError> {
    let joined = origin.join(path).map_err(|source| TransportError::InvalidUrl {
        url: path.to_string(),
        source,
    })?;
    if joined.origin() != origin.origin() {
        return Err(TransportError::CrossOrigin {
            url: joined.into(),
            origin: origin.origin().ascii_serialization(),
        });
    }
    Ok(joined.into())
}

/// Parses the origin of a page URL (scheme, host and port; path dropped).
pub fn parse_origin(page_url: &str) -> Result<url::Url, TransportError> {
    let mut parsed = url::Url::parse(page_url).map_err(|source| TransportError::InvalidUrl {
        url: page_url.to_string(),
        source,
    })?;
    parsed.set_path("/");
    parsed.set_query(None);
    parsed.set_fragment(None);
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_drops_path_and_query() {
        let origin = parse_origin("https://example.com:8443/admin/-/live-permissions/users?x=1").unwrap();
        assert_eq!(origin.as_str(), "https://example.com:8443/");
    }

    #[test]
    fn resolve_absolute_path_against_origin() {
        let origin = parse_origin("http://127.0.0.1:8001/some/page").unwrap();
        assert_eq!(
            resolve_url(&origin, "/admin/-/live-permissions/users/3").unwrap(),
            "http://127.0.0.1:8001/admin/-/live-permissions/users/3"
        );
        assert_eq!(
            resolve_url(&origin, "/live_permissions/users.json?value__contains=al").unwrap(),
            "http://127.0.0.1:8001/live_permissions/users.json?value__contains=al"
        );
    }

    #[test]
    fn scheme_relative_path_is_rejected() {
        let origin = parse_origin("http://localhost:8001/-/live-permissions/users").unwrap();
        assert!(matches!(
            resolve_url(&origin, "//-/live-permissions/users/1"),
            Err(TransportError::CrossOrigin { .. })
        ));
        assert!(matches!(
            resolve_url(&origin, "//evil.example/-/live-permissions/users/1"),
            Err(TransportError::CrossOrigin { .. })
        ));
    }

    #[test]
    fn invalid_origin_is_error() {
        assert!(matches!(
            parse_origin("::nope"),
            Err(TransportError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let req = HttpRequest::new(Method::Delete, "http://x/").header("X-CSRFToken", "t");
        assert_eq!(req.header_value("x-csrftoken"), Some("t"));
        assert_eq!(req.header_value("content-type"), None);
    }

    #[test]
    fn status_helpers() {
        let r = HttpResponse { status: 204, body: Vec::new() };
        assert!(r.is_no_content());
        assert!(r.is_success());
        let r = HttpResponse { status: 302, body: Vec::new() };
        assert!(!r.is_no_content());
        assert!(!r.is_success());
    }
}
