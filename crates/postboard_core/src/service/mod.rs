//! Use-case services.
//!
//! # Responsibility
//! - Apply business rules above the repository layer.
//! - Assemble read models that span more than one repository.
//!
//! # Invariants
//! - Validation happens before any repository call.
//! - Services return every failure to the caller and never log failures.

pub mod author_service;
pub mod error;
pub mod post_service;
pub mod rules;
