//! Command implementations for the nbmeta CLI

pub mod completions;
pub mod sync;
