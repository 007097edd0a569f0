use std::fmt;
use std::sync::Arc;

use http::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use indexmap::IndexMap;
use url::Url;

use crate::auth::basic_auth_header;
use crate::error::Error;
use crate::executor::{HttpExecutor, ReqwestExecutor};
use crate::types::{HttpResponse, Method, PreparedRequest, TlsVerification};

/// Fluent builder for a single HTTP request.
///
/// Configuration calls only record values. Nothing is validated until
/// [`execute`](Self::execute) (or [`prepare`](Self::prepare)) runs, so a bad
/// header name or URL surfaces as a construction error at that point.
///
/// Headers and query parameters keep insertion order; setting an existing
/// key replaces its value in place.
///
/// # Example
///
/// ```no_run
/// use http_request_builder::RequestBuilder;
///
/// let response = RequestBuilder::new()
///     .post()
///     .with_url("https://api.example.com/items")
///     .with_header("Content-Type", "application/json")
///     .with_query_param("dry_run", "true")
///     .with_basic_auth("user", "secret")
///     .with_body(r#"{"name":"widget"}"#)
///     .execute()?;
///
/// assert!(response.is_success());
/// # Ok::<(), http_request_builder::Error>(())
/// ```
#[derive(Clone)]
pub struct RequestBuilder {
    method: Option<Method>,
    url: Option<String>,
    headers: IndexMap<String, String>,
    query_params: IndexMap<String, String>,
    basic_auth: Option<(String, String)>,
    skip_tls_verify: bool,
    body: Option<Vec<u8>>,
    executor: Arc<dyn HttpExecutor>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("query_params", &self.query_params)
            .field("basic_auth", &self.basic_auth.as_ref().map(|(user, _)| user))
            .field("skip_tls_verify", &self.skip_tls_verify)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

impl RequestBuilder {
    /// Create an empty builder that sends through [`ReqwestExecutor`].
    pub fn new() -> Self {
        Self {
            method: None,
            url: None,
            headers: IndexMap::new(),
            query_params: IndexMap::new(),
            basic_auth: None,
            skip_tls_verify: false,
            body: None,
            executor: Arc::new(ReqwestExecutor::new()),
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn get(self) -> Self {
        self.with_method(Method::GET)
    }

    pub fn post(self) -> Self {
        self.with_method(Method::POST)
    }

    pub fn put(self) -> Self {
        self.with_method(Method::PUT)
    }

    pub fn patch(self) -> Self {
        self.with_method(Method::PATCH)
    }

    pub fn delete(self) -> Self {
        self.with_method(Method::DELETE)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }

    /// Send HTTP Basic credentials. Overrides any `Authorization` header set
    /// with [`with_header`](Self::with_header).
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }

    /// Accept any server certificate and hostname. Has no effect on plain
    /// `http` URLs.
    pub fn skip_tls_verification(mut self) -> Self {
        self.skip_tls_verify = true;
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Replace the transport used by [`execute`](Self::execute).
    pub fn with_executor(mut self, executor: Arc<dyn HttpExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn method(&self) -> Option<Method> {
        self.method
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    pub fn query_params(&self) -> &IndexMap<String, String> {
        &self.query_params
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn has_basic_auth(&self) -> bool {
        self.basic_auth.is_some()
    }

    pub fn skips_tls_verification(&self) -> bool {
        self.skip_tls_verify
    }

    /// Assemble the request exactly as [`execute`](Self::execute) would send it.
    ///
    /// Every error returned here is a construction error.
    pub fn prepare(&self) -> Result<PreparedRequest, Error> {
        let method = self.method.ok_or(Error::MissingMethod)?;
        let url = self.build_url()?;
        let headers = self.build_headers()?;

        let tls = if self.skip_tls_verify {
            TlsVerification::Skip
        } else {
            TlsVerification::Verify
        };

        Ok(PreparedRequest {
            method,
            url,
            headers,
            body: self.body.clone(),
            tls,
        })
    }

    /// Send the request and read the whole response body.
    ///
    /// A response whose body cannot be read is returned with an empty body
    /// rather than as an error.
    pub fn execute(&self) -> Result<HttpResponse, Error> {
        let request = self.prepare()?;
        self.executor.execute(request)
    }

    fn build_url(&self) -> Result<Url, Error> {
        let raw = self.url.as_deref().ok_or(Error::MissingUrl)?;
        let mut url = Url::parse(raw)?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::UnsupportedScheme {
                    scheme: scheme.to_string(),
                })
            }
        }

        if !self.query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query_params);
        }

        Ok(url)
    }

    fn build_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::with_capacity(self.headers.len() + 1);
        for (name, value) in &self.headers {
            let header_name = HeaderName::try_from(name.as_str())?;
            let header_value = HeaderValue::try_from(value.as_str())?;
            headers.insert(header_name, header_value);
        }

        if let Some((username, password)) = &self.basic_auth {
            headers.insert(AUTHORIZATION, basic_auth_header(username, password)?);
        }

        Ok(headers)
    }
}
