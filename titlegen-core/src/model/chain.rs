use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::edge_table::EdgeTable;

/// One node of the chain: a word, or one of the two reserved boundary
/// markers.
///
/// `Start` stands in as the predecessor of every title's first word and
/// `End` as the successor of its last word. Neither marker ever appears
/// in generated output.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
	Start,
	End,
	Word(String),
}

impl Symbol {
	/// Wraps a word token.
	pub fn word<S: Into<String>>(word: S) -> Self {
		Self::Word(word.into())
	}

	/// The word carried by this symbol, if it is one.
	pub fn as_word(&self) -> Option<&str> {
		match self {
			Self::Word(word) => Some(word),
			_ => None,
		}
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Start => f.write_str("<start>"),
			Self::End => f.write_str("<end>"),
			Self::Word(word) => f.write_str(word),
		}
	}
}

/// A trained first-order Markov model over title words.
///
/// Maps every known symbol to the weighted table of its observed
/// successors. Built once by [`crate::model::ChainBuilder`], read-only
/// afterwards; walkers only ever look nodes up.
///
/// # Invariants
/// - `Symbol::Start` is always a key, even for an empty corpus
/// - Every symbol appearing as a successor in any table, other than
///   `Symbol::End`, is itself a key
/// - After construction, every reachable non-`End` key has at least one
///   outgoing edge (its own `End` edge if nothing else)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Chain {
	/// Mapping from a symbol to its outgoing transitions.
	nodes: HashMap<Symbol, EdgeTable>,
}

impl Chain {
	/// Creates an empty chain holding only the start node.
	pub fn new() -> Self {
		let mut nodes = HashMap::new();
		nodes.insert(Symbol::Start, EdgeTable::new());
		Self { nodes }
	}

	/// Looks up the outgoing transitions of `symbol`.
	pub fn edges(&self, symbol: &Symbol) -> Option<&EdgeTable> {
		self.nodes.get(symbol)
	}

	/// True if `symbol` is a key of the chain.
	pub fn contains(&self, symbol: &Symbol) -> bool {
		self.nodes.contains_key(symbol)
	}

	/// Number of known symbols, the start node included.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// True when nothing beyond the start node has been trained.
	pub fn is_empty(&self) -> bool {
		self.nodes.len() <= 1
	}

	/// Iterates over every (symbol, table) node.
	pub fn nodes(&self) -> impl Iterator<Item = (&Symbol, &EdgeTable)> {
		self.nodes.iter()
	}

	/// Records one observed transition from `from` to `to`.
	///
	/// Creates the source node on first sight so that every edge source
	/// is always a key.
	pub(crate) fn record(&mut self, from: &Symbol, to: Symbol) {
		self.nodes.entry(from.clone()).or_default().record(to);
	}

	/// Ensures `symbol` exists as a key, with an empty table if new.
	pub(crate) fn ensure_node(&mut self, symbol: &Symbol) {
		if !self.nodes.contains_key(symbol) {
			self.nodes.insert(symbol.clone(), EdgeTable::new());
		}
	}

	/// Merges another chain into this one.
	///
	/// Tables of shared symbols are merged with weight summing; symbols
	/// only known to `other` are adopted as-is. Merging the per-shard
	/// chains of a partitioned corpus yields exactly the counts of a
	/// sequential pass over the whole corpus.
	pub fn merge(&mut self, other: &Self) {
		for (symbol, table) in &other.nodes {
			match self.nodes.get_mut(symbol) {
				Some(existing) => existing.merge(table),
				None => {
					self.nodes.insert(symbol.clone(), table.clone());
				}
			}
		}
	}

	#[cfg(test)]
	pub(crate) fn remove_node(&mut self, symbol: &Symbol) {
		self.nodes.remove(symbol);
	}
}

impl Default for Chain {
	fn default() -> Self {
		Chain::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_chain_has_only_an_unconnected_start() {
		let chain = Chain::new();
		assert!(chain.contains(&Symbol::Start));
		assert!(chain.is_empty());
		assert!(chain.edges(&Symbol::Start).unwrap().is_empty());
	}

	#[test]
	fn record_creates_source_nodes() {
		let mut chain = Chain::new();
		chain.record(&Symbol::Start, Symbol::word("the"));
		chain.ensure_node(&Symbol::word("the"));

		let start = chain.edges(&Symbol::Start).unwrap();
		assert_eq!(start.weight(&Symbol::word("the")), Some(1));
		assert!(chain.contains(&Symbol::word("the")));
	}

	#[test]
	fn merge_matches_a_sequential_build() {
		use crate::model::ChainBuilder;

		let titles = ["the godfather", "the sting", "the godfather part ii"];

		let mut left = ChainBuilder::new();
		left.add_title(titles[0]);
		let mut right = ChainBuilder::new();
		right.add_title(titles[1]);
		right.add_title(titles[2]);

		let mut merged = left.finish();
		merged.merge(&right.finish());

		let sequential = ChainBuilder::build(titles);
		assert_eq!(merged, sequential);
	}

	#[test]
	fn symbols_display_without_leaking_words() {
		assert_eq!(Symbol::Start.to_string(), "<start>");
		assert_eq!(Symbol::End.to_string(), "<end>");
		assert_eq!(Symbol::word("vertigo").to_string(), "vertigo");
		assert_eq!(Symbol::word("vertigo").as_word(), Some("vertigo"));
		assert_eq!(Symbol::End.as_word(), None);
	}
}
