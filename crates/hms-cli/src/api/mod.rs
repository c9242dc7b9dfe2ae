//! API client module
//!
//! HTTP client for the hospital management backend.

pub mod client;
pub mod endpoints;
pub mod resources;
pub mod types;

pub use client::ApiClient;
pub use endpoints::{Endpoint, Operation, RequestDescriptor, Resource};
pub use types::*;
