//! # sf-core
//!
//! Core types, traits, and utilities for Stockflow.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - The error taxonomy shared by the HTTP binding and the data-sync views
//! - Field-level validation error collections
//! - Core traits (Identifiable, Resource, Costed)
//! - Client configuration

pub mod config;
pub mod error;
pub mod traits;

pub use config::{ClientConfig, ConfigError, NotificationConfig, ProductionArticleKey, RetryConfig};
pub use error::*;
pub use traits::*;
