//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository reads and path resolution into use-case APIs.
//! - Keep the CLI layer decoupled from SQL and storage layout.

pub mod library_service;
