//! # vpsc-api
//!
//! Typed asynchronous client for the Sakura VPS cloud API: servers, NFS
//! appliances, network switches, access-control roles, API keys and
//! permissions.
//!
//! Every operation on [`client::VpscClient`] is a thin declaration over
//! the request dispatcher in [`vpsc_core`]; errors propagate from there
//! unchanged.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod models;

pub use client::VpscClient;
pub use vpsc_core::config::ApiConfig;
pub use vpsc_core::error::{Error, Result};
