//! Common utilities and shared types for chirp-rs.
//!
//! This crate provides foundational components used across all chirp-rs crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **Storage**: Local media storage for uploaded images via [`MediaStorage`]

pub mod config;
pub mod error;
pub mod storage;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use storage::MediaStorage;
