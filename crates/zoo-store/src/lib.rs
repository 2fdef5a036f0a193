//! # zoo-store
//!
//! Persistence for the zoo manager: one JSON snapshot file per project,
//! replaced atomically on every commit, plus an append-only JSONL trail of
//! committed changes.
//!
//! The engine hands over [`zoo_engine::AssignmentPlan`]s and
//! [`zoo_engine::Reassignment`]s; this crate is the only writer of
//! `.zoo/`.

pub mod error;
pub mod store;
pub mod trail;

pub use error::StoreError;
pub use store::ZooStore;
pub use trail::{TrailOp, TrailRecord, TrailWriter};
