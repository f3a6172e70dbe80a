//! # sf-client
//!
//! Typed REST binding for the inventory API.
//!
//! [`ApiClient`] is the seam the rest of the workspace depends on; [`HttpApiClient`]
//! is the reqwest-backed implementation that talks to the real backend. Every
//! non-success response is classified into an [`sf_core::SfError`] with the body's
//! `message` field preserved.

pub mod client;
pub mod endpoints;
pub mod http;

pub use client::ApiClient;
pub use http::HttpApiClient;
