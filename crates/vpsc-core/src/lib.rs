//! # vpsc-core
//!
//! Core building blocks for talking to the Sakura VPS cloud API.
//!
//! This crate owns the single choke point through which every API
//! operation travels: the [`dispatch::Dispatcher`] turns an immutable
//! [`dispatch::RequestDescriptor`] into one HTTP exchange, decodes the
//! response into typed values and maps failures onto the closed error
//! taxonomy in [`error`].
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and HTTP status classification
//! - [`config`] - API credentials and host configuration
//! - [`dispatch`] - Request descriptors and the transport dispatcher
//! - [`query`] - Query-parameter builder (extension point)

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dispatch;
pub mod error;
pub mod query;

// Re-export commonly used types
pub use config::ApiConfig;
pub use dispatch::{Dispatcher, RequestDescriptor};
pub use error::{Error, Result};
