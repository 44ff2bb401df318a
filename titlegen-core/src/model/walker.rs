use rand::Rng;

use crate::error::{Result, TitlegenError};
use crate::model::chain::{Chain, Symbol};

/// Strategy for choosing where a walk begins.
///
/// # Variants
/// - `Start`: begin at the chain's start marker; the first sampled word
///   opens the title.
/// - `Word(String)`: begin at a caller-chosen word, which opens the
///   title itself. The word must be known to the chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Seed {
	Start,
	Word(String),
}

impl Seed {
	/// Builds a seed from an optional caller-supplied word.
	pub fn from_word(word: Option<String>) -> Self {
		match word {
			Some(word) => Self::Word(word),
			None => Self::Start,
		}
	}

	/// The chain node this seed starts from.
	pub(crate) fn symbol(&self) -> Symbol {
		match self {
			Self::Start => Symbol::Start,
			Self::Word(word) => Symbol::word(word.clone()),
		}
	}

	/// The textual form a degenerate walk from this seed would take:
	/// the bare seed word, or the empty string for the start marker.
	pub(crate) fn rendered(&self) -> String {
		match self {
			Self::Start => String::new(),
			Self::Word(word) => word.clone(),
		}
	}
}

/// Performs one weighted random walk from `seed` to the end marker and
/// returns the visited words joined with single spaces.
///
/// Each step samples the current node's successors with probability
/// proportional to their observed weights. The walk has no internal
/// step limit; termination is probabilistic, which over a trained
/// chain means almost surely but not within any fixed bound.
///
/// # Errors
/// - `StartNotFound` when `seed` is not a key of the chain.
/// - `UnknownSymbol` when a sampled successor has no node of its own,
///   which only corrupt or hand-edited chain data can produce.
pub fn walk<R: Rng + ?Sized>(chain: &Chain, seed: &Seed, rng: &mut R) -> Result<String> {
	let start = seed.symbol();
	let mut table = chain
		.edges(&start)
		.ok_or_else(|| TitlegenError::StartNotFound(start.to_string()))?;

	let mut words: Vec<String> = Vec::new();
	if let Seed::Word(word) = seed {
		words.push(word.clone());
	}

	loop {
		let successor = table.sample(rng)?;
		match successor {
			Symbol::End => break,
			Symbol::Word(word) => {
				words.push(word.clone());
				table = chain
					.edges(successor)
					.ok_or_else(|| TitlegenError::UnknownSymbol(word.clone()))?;
			}
			// The start marker is never a successor in well-formed data.
			Symbol::Start => {
				return Err(TitlegenError::UnknownSymbol(successor.to_string()));
			}
		}
	}

	Ok(words.join(" "))
}
