use std::collections::HashMap;

use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::chain::Symbol;
use crate::model::sampler;

/// Outgoing transitions of a single chain node.
///
/// An `EdgeTable` stores every successor observed immediately after one
/// symbol, weighted by how many times that succession occurred.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during construction
/// - Pick a successor using weighted random sampling
/// - Merge with the table of the same symbol from another partial chain
///
/// ## Invariants
/// - Each recorded weight is strictly positive
/// - Insertion order of successors carries no meaning
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeTable {
	/// Outgoing transitions indexed by the successor symbol.
	/// The value represents how many times this transition was observed.
	edges: HashMap<Symbol, usize>,
}

impl EdgeTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self { edges: HashMap::new() }
	}

	/// Records an occurrence of a transition toward `successor`.
	///
	/// - If the transition already exists, its weight is increased.
	/// - Otherwise, a new transition is created with an initial weight of 1.
	pub fn record(&mut self, successor: Symbol) {
		*self.edges.entry(successor).or_insert(0) += 1;
	}

	/// Picks one successor using weighted random sampling.
	///
	/// The probability of selecting a successor is proportional to its
	/// observed weight. Performs an O(n) scan over the transitions.
	///
	/// # Errors
	/// `SamplerExhausted` when the table is empty, which a fully built
	/// chain never contains for a reachable symbol.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Symbol> {
		let pairs: Vec<(&Symbol, usize)> = self.entries().collect();
		sampler::weighted_choice(&pairs, rng)
	}

	/// Merges another table into this one, summing weights for shared
	/// successors. Intended for combining per-shard partial chains.
	pub fn merge(&mut self, other: &Self) {
		for (successor, weight) in &other.edges {
			*self.edges.entry(successor.clone()).or_insert(0) += *weight;
		}
	}

	/// Weight of the edge toward `successor`, if observed.
	pub fn weight(&self, successor: &Symbol) -> Option<usize> {
		self.edges.get(successor).copied()
	}

	/// Sum of all outgoing weights.
	pub fn total_weight(&self) -> usize {
		self.edges.values().sum()
	}

	/// True when no transition has been recorded yet.
	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}

	/// Number of distinct successors.
	pub fn len(&self) -> usize {
		self.edges.len()
	}

	/// Iterates over (successor, weight) entries in no particular order.
	pub fn entries(&self) -> impl Iterator<Item = (&Symbol, usize)> {
		self.edges.iter().map(|(symbol, weight)| (symbol, *weight))
	}
}
