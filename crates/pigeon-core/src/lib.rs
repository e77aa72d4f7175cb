#![forbid(unsafe_code)]

//! Pigeon ancestry model and pedigree tree construction (headless).
//!
//! The crate does not own persistence: callers hand in anything implementing [`PigeonStore`]
//! and receive a [`PedigreeTree`], a flat heap-indexed snapshot of the ancestry that layout and
//! rendering code can read without touching the store again.

pub mod error;
pub mod geom;
pub mod pedigree;
pub mod pigeon;
pub mod store;

pub use error::{Error, Result};
pub use pedigree::{
    Ancestor, COMPACT_DEPTH, DEFAULT_DEPTH, MAX_DEPTH, PedigreeTree, build_pedigree_tree,
};
pub use pigeon::{Band, EXTRA_FIELDS, Pigeon, PigeonField, PigeonId, Sex};
pub use store::{MemoryStore, PigeonStore};

#[cfg(test)]
mod tests;
