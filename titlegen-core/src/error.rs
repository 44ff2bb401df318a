//! Error handling utilities shared across the crate.

use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = TitlegenError> = std::result::Result<T, E>;

/// Domain-specific error describing failures during generation or persistence.
#[derive(Debug, Error)]
pub enum TitlegenError {
	/// The requested walk seed is not a key of the chain.
	#[error("seed {0:?} is not a word known to the chain")]
	StartNotFound(String),
	/// The chain holds an edge to a symbol that has no table of its own.
	/// Only possible with corrupt or hand-edited chain data.
	#[error("chain has an edge to {0:?} but no entry for it")]
	UnknownSymbol(String),
	/// The weighted sampler scanned every pair without selecting one.
	/// Indicates a bug in the accumulation logic, not bad input.
	#[error("weighted sampler exhausted its choices without selecting one")]
	SamplerExhausted,
	/// Filesystem error while reading or writing a chain or corpus file.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
	/// Serialization or deserialization failure.
	#[error("serialization error: {0}")]
	Serialization(String),
}

impl From<postcard::Error> for TitlegenError {
	fn from(err: postcard::Error) -> Self {
		Self::Serialization(err.to_string())
	}
}
