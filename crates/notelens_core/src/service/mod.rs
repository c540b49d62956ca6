//! Core use-case services.
//!
//! # Responsibility
//! - Compose the analyzers into use-case level projections.
//! - Keep UI/FFI layers decoupled from individual analyzers.

pub mod insight_service;
