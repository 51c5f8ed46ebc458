//! CSRF-protected state-changing requests.
//!
//! The token is whatever the page's hidden `csrftoken` field currently holds;
//! callers pass it on every call so a rotated token is always honored. With
//! no token the client refuses to send anything.

mod error;
mod token;

pub use error::MutationError;
pub use token::{CsrfToken, CSRF_FIELD_NAME, CSRF_HEADER};

use crate::http::{resolve_url, FormBody, HttpRequest, HttpResponse, Method, Transport};
use std::sync::Arc;

/// Issues mutations against the page origin through a [`Transport`].
#[derive(Clone)]
pub struct MutationClient {
    origin: url::Url,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for MutationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutationClient")
            .field("origin", &self.origin.as_str())
            .finish_non_exhaustive()
    }
}

impl MutationClient {
    pub fn new(origin: url::Url, transport: Arc<dyn Transport>) -> Self {
        Self { origin, transport }
    }

    pub fn origin(&self) -> &url::Url {
        &self.origin
    }

    /// Sends `DELETE path` with the CSRF header and an optional form body.
    ///
    /// Returns the raw response; the status is not interpreted here. Without a
    /// token, returns [`MutationError::MissingCsrfToken`] and sends nothing.
    pub fn mutate(
        &self,
        csrf: Option<&CsrfToken>,
        path: &str,
        form: Option<&FormBody>,
    ) -> Result<HttpResponse, MutationError> {
        self.send(Method::Delete, csrf, path, form)
    }

    /// Sends `POST path` with a form body: the create/update half of the
    /// plugin's record endpoint (`.../{table}/new` creates).
    pub fn submit(
        &self,
        csrf: Option<&CsrfToken>,
        path: &str,
        form: &FormBody,
    ) -> Result<HttpResponse, MutationError> {
        self.send(Method::Post, csrf, path, Some(form))
    }

    /// [`mutate`](Self::mutate) on tokio's blocking pool.
    pub async fn mutate_async(
        &self,
        csrf: Option<CsrfToken>,
        path: String,
        form: Option<FormBody>,
    ) -> Result<HttpResponse, MutationError> {
        let client = self.clone();
        tokio::task::spawn_blocking(move || client.mutate(csrf.as_ref(), &path, form.as_ref())).await?
    }

    fn send(
        &self,
        method: Method,
        csrf: Option<&CsrfToken>,
        path: &str,
        form: Option<&FormBody>,
    ) -> Result<HttpResponse, MutationError> {
        let Some(token) = csrf else {
            tracing::debug!(path, "no csrf token on page; mutation not sent");
            return Err(MutationError::MissingCsrfToken);
        };

        let url = resolve_url(&self.origin, path)?;
        let mut request = HttpRequest::new(method, url).header(CSRF_HEADER, token.as_str());
        if let Some(form) = form {
            request = request.header("content-type", form.content_type());
            request.body = Some(form.encode().into_bytes());
        }

        let response = self.transport.send(&request)?;
        tracing::debug!(%method, path, status = response.status, "mutation completed");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::TransportError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        requests: Mutex<Vec<HttpRequest>>,
        status: u32,
    }

    impl Transport for Recording {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(HttpResponse {
                status: self.status,
                body: Vec::new(),
            })
        }
    }

    fn client(status: u32) -> (MutationClient, Arc<Recording>) {
        let transport = Arc::new(Recording {
            status,
            ..Default::default()
        });
        let origin = url::Url::parse("http://localhost:8001/").unwrap();
        (MutationClient::new(origin, transport.clone()), transport)
    }

    #[test]
    fn missing_token_sends_nothing() {
        let (client, transport) = client(204);
        let err = client
            .mutate(None, "/-/live-permissions/users/1", None)
            .unwrap_err();
        assert!(matches!(err, MutationError::MissingCsrfToken));
        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[test]
    fn delete_carries_csrf_header_and_no_body() {
        let (client, transport) = client(204);
        let token = CsrfToken::new("tok-1").unwrap();
        let resp = client
            .mutate(Some(&token), "/-/live-permissions/users/1", None)
            .unwrap();
        assert_eq!(resp.status, 204);

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.url, "http://localhost:8001/-/live-permissions/users/1");
        assert_eq!(req.header_value("x-csrftoken"), Some("tok-1"));
        assert!(req.body.is_none());
        assert!(req.header_value("content-type").is_none());
    }

    #[test]
    fn form_body_is_url_encoded() {
        let (client, transport) = client(204);
        let token = CsrfToken::new("tok").unwrap();
        let form = FormBody::new().field("user_id", "9");
        client
            .mutate(Some(&token), "/-/live-permissions/db/manage/mydb", Some(&form))
            .unwrap();

        let requests = transport.requests.lock().unwrap();
        let req = &requests[0];
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.body.as_deref(), Some(&b"user_id=9"[..]));
        assert_eq!(
            req.header_value("content-type"),
            Some("application/x-www-form-urlencoded;charset=UTF-8")
        );
    }

    #[test]
    fn non_success_status_is_returned_raw() {
        let (client, _) = client(403);
        let token = CsrfToken::new("tok").unwrap();
        let resp = client.mutate(Some(&token), "/x", None).unwrap();
        assert_eq!(resp.status, 403);
    }

    #[test]
    fn submit_posts_form() {
        let (client, transport) = client(302);
        let token = CsrfToken::new("tok").unwrap();
        let form = FormBody::new().field("name", "editors");
        client
            .submit(Some(&token), "/-/live-permissions/groups/new", &form)
            .unwrap();
        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].body.as_deref(), Some(&b"name=editors"[..]));
    }

    #[test]
    fn token_is_read_per_call() {
        let (client, transport) = client(204);
        let first = CsrfToken::new("first").unwrap();
        let second = CsrfToken::new("second").unwrap();
        client.mutate(Some(&first), "/a", None).unwrap();
        client.mutate(Some(&second), "/b", None).unwrap();
        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].header_value("x-csrftoken"), Some("first"));
        assert_eq!(requests[1].header_value("x-csrftoken"), Some("second"));
    }

    #[tokio::test]
    async fn mutate_async_runs_on_blocking_pool() {
        let (client, transport) = client(204);
        let token = CsrfToken::new("tok").unwrap();
        let resp = client
            .mutate_async(Some(token), "/-/live-permissions/users/5".to_string(), None)
            .await
            .unwrap();
        assert!(resp.is_no_content());
        assert_eq!(transport.requests.lock().unwrap().len(), 1);
    }
}
