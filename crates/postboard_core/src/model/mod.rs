//! Entity records for the author and post slices.
//!
//! # Responsibility
//! - Define the plain data shapes stored by repositories.
//! - Define the read-time `Post` composite returned by the post service.
//!
//! # Invariants
//! - Identities are repository-assigned and never change after assignment.
//! - A `Post` is never stored; it is rebuilt on every read.

pub mod author;
pub mod post;
