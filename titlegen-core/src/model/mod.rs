//! Top-level module for the Markov title generation system.
//!
//! This module provides a word-level Markov generator, including:
//! - The trained transition model (`Chain`)
//! - Incremental, frequency-counting construction (`ChainBuilder`)
//! - Weighted random sampling (`sampler`)
//! - Single-title random walks (`walker`)
//! - An infinite deduplicating title stream (`UniqueStream`)

/// The trained chain: symbols mapped to weighted successor tables.
///
/// Read-only once built. Construction goes through `ChainBuilder`,
/// persistence through `crate::io`.
pub mod chain;

/// Incremental chain construction from cleaned titles.
///
/// Supports one-shot building, incremental feeding, and a sharded
/// parallel build that merges partial chains with weight summing.
pub mod builder;

/// Weighted random selection over (item, weight) pairs.
pub mod sampler;

/// Single weighted random walk through a trained chain.
pub mod walker;

/// Infinite, deduplicating generation stream.
pub mod stream;

/// One node's outgoing transitions: successor weights plus weighted
/// random sampling over them.
pub mod edge_table;

pub use builder::ChainBuilder;
pub use chain::{Chain, Symbol};
pub use stream::{UniqueStream, stream};
pub use walker::{Seed, walk};
