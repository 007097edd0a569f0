//! HTTP execution abstraction.
//!
//! [`RequestBuilder`](crate::RequestBuilder) assembles a [`PreparedRequest`]
//! and hands it to an [`HttpExecutor`]. The executor owns all transport
//! mechanics, which keeps the builder testable without network calls.

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::error::Error;
use crate::types::{HttpResponse, PreparedRequest, TlsVerification};

/// Trait for executing HTTP requests.
///
/// Implementations can use real HTTP clients or mock responses for testing.
pub trait HttpExecutor: Send + Sync {
    /// Send the request and return the response.
    ///
    /// Returns a transport error if the request could not be sent.
    fn execute(&self, request: PreparedRequest) -> Result<HttpResponse, Error>;
}

/// Production HTTP executor using reqwest's blocking client.
///
/// A client is built per request for the requested [`TlsVerification`]. No
/// timeout is configured, so reqwest's defaults apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestExecutor;

impl ReqwestExecutor {
    pub fn new() -> Self {
        Self
    }

    fn client(&self, tls: TlsVerification) -> Result<Client, Error> {
        let builder = match tls {
            TlsVerification::Verify => Client::builder(),
            TlsVerification::Skip => Client::builder()
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true),
        };

        Ok(builder.build()?)
    }
}

impl HttpExecutor for ReqwestExecutor {
    fn execute(&self, request: PreparedRequest) -> Result<HttpResponse, Error> {
        let client = self.client(request.tls)?;

        debug!(
            method = %request.method,
            url = %request.url,
            tls = ?request.tls,
            "sending request"
        );

        let mut req_builder = client
            .request(request.method.into(), request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder.send()?;
        let status = response.status().as_u16();

        let body = match response.bytes() {
            Ok(bytes) => bytes.to_vec(),
            Err(error) => {
                warn!(status, %error, "failed to read response body, treating it as empty");
                Vec::new()
            }
        };

        debug!(status, len = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}

/// Mock HTTP executor for testing.
///
/// Records every request it receives and returns a predefined response.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// A mock HTTP executor that returns predefined responses.
    #[derive(Clone, Default)]
    pub struct MockExecutor {
        /// Response returned for every request. 200 with an empty body if unset.
        response: Arc<Mutex<Option<HttpResponse>>>,
        /// Recorded requests for verification.
        recorded_requests: Arc<Mutex<Vec<PreparedRequest>>>,
        /// Error message to fail every request with.
        error_message: Arc<Mutex<Option<String>>>,
        /// Panic if invoked at all.
        forbidden: bool,
    }

    impl MockExecutor {
        pub fn new() -> Self {
            Self::default()
        }

        /// An executor that fails the test if anything reaches the transport.
        pub fn forbidden() -> Self {
            Self {
                forbidden: true,
                ..Self::default()
            }
        }

        pub fn with_response(self, response: HttpResponse) -> Self {
            *self.response.lock().unwrap() = Some(response);
            self
        }

        /// Configure to fail all requests with a transport error.
        pub fn fail_with(self, message: impl Into<String>) -> Self {
            *self.error_message.lock().unwrap() = Some(message.into());
            self
        }

        pub fn recorded_requests(&self) -> Vec<PreparedRequest> {
            self.recorded_requests.lock().unwrap().clone()
        }
    }

    impl HttpExecutor for MockExecutor {
        fn execute(&self, request: PreparedRequest) -> Result<HttpResponse, Error> {
            assert!(
                !self.forbidden,
                "transport invoked for {} {}",
                request.method, request.url
            );

            self.recorded_requests.lock().unwrap().push(request);

            if let Some(message) = self.error_message.lock().unwrap().clone() {
                return Err(Error::transport(message));
            }

            Ok(self
                .response
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| HttpResponse::new(200, Vec::new())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockExecutor;
    use super::*;
    use crate::types::Method;
    use http::HeaderMap;
    use url::Url;

    fn prepared(method: Method, url: &str) -> PreparedRequest {
        PreparedRequest {
            method,
            url: Url::parse(url).unwrap(),
            headers: HeaderMap::new(),
            body: None,
            tls: TlsVerification::Verify,
        }
    }

    #[test]
    fn mock_executor_returns_configured_response() {
        let executor = MockExecutor::new().with_response(HttpResponse::new(201, "created"));

        let result = executor
            .execute(prepared(Method::POST, "http://localhost/items"))
            .unwrap();

        assert_eq!(result.status, 201);
        assert_eq!(result.body, b"created".to_vec());
    }

    #[test]
    fn mock_executor_fails_when_configured() {
        let executor = MockExecutor::new().fail_with("Network error");
        let result = executor.execute(prepared(Method::GET, "http://localhost/"));

        let err = result.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "HTTP transport error: Network error");
    }

    #[test]
    fn mock_executor_records_requests() {
        let executor = MockExecutor::new();

        executor
            .execute(prepared(Method::GET, "http://localhost/first"))
            .unwrap();
        executor
            .execute(prepared(Method::DELETE, "http://localhost/second"))
            .unwrap();

        let recorded = executor.recorded_requests();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].url.path(), "/first");
        assert_eq!(recorded[0].method, Method::GET);
        assert_eq!(recorded[1].url.path(), "/second");
        assert_eq!(recorded[1].method, Method::DELETE);
    }

    #[test]
    #[should_panic(expected = "transport invoked")]
    fn forbidden_executor_panics() {
        let _ = MockExecutor::forbidden().execute(prepared(Method::GET, "http://localhost/"));
    }

    #[test]
    fn reqwest_executor_builds_verifying_client() {
        assert!(ReqwestExecutor::new().client(TlsVerification::Verify).is_ok());
    }

    #[test]
    fn reqwest_executor_builds_insecure_client() {
        assert!(ReqwestExecutor::new().client(TlsVerification::Skip).is_ok());
    }
}
