//! # marketcache-brapi
//!
//! Upstream provider adapter backed by the [brapi.dev](https://brapi.dev)
//! API. Plugs a [`BrapiClient`] into the `marketcache-core` engines as their
//! [`UpstreamProvider`](marketcache_core::UpstreamProvider).

mod client;
mod errors;
mod models;

pub use client::{BrapiClient, BrapiConfig};
pub use errors::BrapiError;
