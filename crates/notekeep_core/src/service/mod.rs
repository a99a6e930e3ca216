//! Core use-case services.
//!
//! # Responsibility
//! - Give UI layers a storage-agnostic entry point.

pub mod note_service;
