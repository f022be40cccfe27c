//! HTTP API layer for chirp-rs.
//!
//! This crate provides the REST API:
//!
//! - **Endpoints**: users, tweets, media uploads
//! - **Extractors**: authentication by API token
//! - **Middleware**: token lookup, application state
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

pub use endpoints::router;
