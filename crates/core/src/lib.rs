//! Core business logic for chirp-rs.

pub mod services;

pub use services::*;
