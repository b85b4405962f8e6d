#![forbid(unsafe_code)]

//! Spec-driven request resolution and execution.
//!
//! The document model and decode policy live in `opencall-core`; this crate
//! owns the network-facing half: fetching specification documents, resolving
//! a call into concrete request parts, and performing it through an injected
//! transport.

pub mod credentials;
pub mod error;
pub mod executor;
pub mod http;
pub mod loader;
pub mod request;

pub use crate::credentials::{CredentialValue, Credentials};
pub use crate::error::{
    CallError, ConfigurationError, NetworkError, RequestError, ValidationError,
};
pub use crate::executor::{execute, parse_body_text};
pub use crate::http::{
    HttpClient, HttpError, HttpRequestParts, HttpResponseParts, ReqwestHttpClient,
};
pub use crate::loader::load_spec;
pub use crate::request::build_request;
