//! # http-request-builder
//!
//! A fluent builder for blocking HTTP requests.
//!
//! Configure the method, URL, headers, query parameters, body, basic
//! credentials and TLS verification through chained calls, then `execute`
//! the request to get the status code and the full response body:
//!
//! ```ignore
//! use http_request_builder::RequestBuilder;
//!
//! let response = RequestBuilder::new()
//!     .get()
//!     .with_url("https://self-signed.internal/health")
//!     .with_query_param("verbose", "1")
//!     .skip_tls_verification()
//!     .execute()?;
//!
//! let (body, status) = response.into_parts();
//! ```
//!
//! ## Errors
//!
//! Failures fall into two kinds (see [`ErrorKind`]):
//!
//! - **Construction** errors: the request could not be assembled (no method,
//!   no URL, malformed URL or header). Nothing is sent.
//! - **Transport** errors: the underlying client could not complete the
//!   exchange (DNS, connection refused, TLS handshake, timeouts).
//!
//! A response whose body cannot be read is *not* an error: it is returned
//! with its status code and an empty body.
//!
//! ## Transport
//!
//! Requests are sent through an [`HttpExecutor`]. The default,
//! [`ReqwestExecutor`], uses reqwest's blocking client, so `execute` must not
//! be called directly from async code; use `spawn_blocking` instead.

pub mod auth;
pub mod error;
pub mod executor;
pub mod types;

mod builder;

pub use builder::RequestBuilder;
pub use error::{Error, ErrorKind};
pub use executor::{HttpExecutor, ReqwestExecutor};
pub use types::{HttpResponse, Method, PreparedRequest, TlsVerification};
