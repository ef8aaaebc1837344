//! HTTP request engine.
//!
//! This module builds and sends single requests to the registry, attaches
//! authentication and maps responses onto [`Error`](crate::Error).

mod client;
mod tolerant;
mod wire;

pub use client::{ApiClient, CUSTOMER_ID_HEADER};
pub use tolerant::normalize_keys;
