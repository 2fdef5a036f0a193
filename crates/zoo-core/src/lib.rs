//! # zoo-core
//!
//! Core types, typed ids, and error types for the zoo manager.
//!
//! This crate provides the foundational types shared across all zoo crates:
//! - Entity structs for animals, enclosures, and categories
//! - Classification enums with an explicit total order for security levels
//! - The habitat set used for flags-style habitat types
//! - Typed ids for every entity
//! - Cross-cutting error types
//! - Report and response types returned by the engine and printed by the CLI

pub mod entities;
pub mod enums;
pub mod errors;
pub mod habitat;
pub mod ids;
pub mod responses;
