//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate engine and repository calls into use-case level APIs.
//! - Keep callers decoupled from storage details.

pub mod chart_service;
