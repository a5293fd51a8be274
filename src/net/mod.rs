//! Networking modules for the blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `service` performs HTTP calls and classifies failures, and `types` defines
//! the JSON schema shared with the API.

pub mod service;
pub mod types;
