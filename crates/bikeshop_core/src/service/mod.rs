//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate validator, mapper and repository into the CRUD
//!   operation flow shared by both resources.
//! - Keep HTTP delivery decoupled from storage details.

pub mod catalog;
