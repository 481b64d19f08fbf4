//! HTTP/JSON API server for the botflow studio.
//!
//! Exposes bot CRUD and flow-document save endpoints over a REST API. Flow
//! documents travel and persist as opaque JSON blobs; their structure is
//! defined and validated by `botflow-core` on the client side. This crate
//! contains the server framework, API schema types, error handling, and
//! route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
