//! Core mutation services.
//!
//! # Responsibility
//! - Orchestrate repository calls into validated, atomic use-case APIs.
//! - Keep UI collaborators decoupled from storage details.
//!
//! # Invariants
//! - Every operation validates its input before a transaction opens; no
//!   partially-applied edit is ever persisted.

pub mod list_service;
pub mod task_service;
