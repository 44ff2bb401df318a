use std::sync::mpsc;
use std::thread;

use log::debug;

use crate::model::chain::{Chain, Symbol};

/// Builds a [`Chain`] by counting word transitions across a corpus of
/// cleaned titles.
///
/// # Responsibilities
/// - Feed titles one by one or from any iterable
/// - Maintain exact occurrence counts for every observed transition
/// - Combine partial builds from a sharded corpus
///
/// # Notes
/// - Input titles are expected already cleaned: lowercase, free of
///   quotes, parentheses and newlines, whitespace-tokenizable.
///   Upstream filtering is responsible for dropping unparseable
///   records before they reach the builder.
/// - Titles with no tokens are skipped entirely; they contribute no
///   edges and are not counted.
/// - Construction is deterministic; two builds over the same corpus
///   produce identical weights.
#[derive(Debug, Default)]
pub struct ChainBuilder {
	chain: Chain,
}

impl ChainBuilder {
	/// Creates a builder around an empty chain.
	pub fn new() -> Self {
		Self { chain: Chain::new() }
	}

	/// Feeds one title, splitting it on whitespace.
	pub fn add_title(&mut self, title: &str) {
		self.add_tokens(title.split_whitespace());
	}

	/// Feeds one pre-tokenized title.
	///
	/// Each token gets a transition edge from its predecessor (the
	/// start marker for the first token), a node of its own on first
	/// sight, and the final token gets an edge to the end marker.
	/// Empty tokens are not expected input and are ignored.
	pub fn add_tokens<I, S>(&mut self, tokens: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut previous = Symbol::Start;
		let mut seen_any = false;

		for token in tokens {
			let token = token.as_ref();
			if token.is_empty() {
				continue;
			}
			let symbol = Symbol::word(token);
			self.chain.record(&previous, symbol.clone());
			self.chain.ensure_node(&symbol);
			previous = symbol;
			seen_any = true;
		}

		if seen_any {
			self.chain.record(&previous, Symbol::End);
		}
	}

	/// Consumes the builder and returns the finished chain.
	pub fn finish(self) -> Chain {
		self.chain
	}

	/// One-shot build over an iterable of titles.
	pub fn build<I, S>(titles: I) -> Chain
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut builder = Self::new();
		for title in titles {
			builder.add_title(title.as_ref());
		}
		builder.finish()
	}

	/// Builds a chain from `titles` using one worker per input shard.
	///
	/// Splits the corpus into chunks (CPU count times a spread factor),
	/// builds a partial chain per chunk on its own thread, and merges
	/// the partials with weight summing. The merged result carries
	/// exactly the counts a sequential [`Self::build`] would produce.
	pub fn build_parallel(titles: Vec<String>) -> Chain {
		if titles.is_empty() {
			return Chain::new();
		}

		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = titles.len().div_ceil(chunks);
		debug!(
			"building chain over {} titles in {} chunks",
			titles.len(),
			titles.len().div_ceil(chunk_size)
		);

		let (tx, rx) = mpsc::channel();
		for chunk in titles.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<String> = chunk.to_vec();

			thread::spawn(move || {
				let mut builder = ChainBuilder::new();
				for title in &chunk {
					builder.add_title(title);
				}
				tx.send(builder.finish()).expect("Failed to send from thread");
			});
		}
		drop(tx);

		let mut chain = Chain::new();
		for partial in rx.iter() {
			chain.merge(&partial);
		}
		chain
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn start_weights_count_nonempty_titles() {
		let chain = ChainBuilder::build(["the godfather", "vertigo", "the sting", ""]);
		let start = chain.edges(&Symbol::Start).unwrap();
		assert_eq!(start.total_weight(), 3);
	}

	#[test]
	fn single_title_chain_shape() {
		let chain = ChainBuilder::build(["the godfather"]);

		let start = chain.edges(&Symbol::Start).unwrap();
		assert_eq!(start.weight(&Symbol::word("the")), Some(1));
		assert_eq!(start.len(), 1);

		let the = chain.edges(&Symbol::word("the")).unwrap();
		assert_eq!(the.weight(&Symbol::word("godfather")), Some(1));
		assert_eq!(the.len(), 1);

		let godfather = chain.edges(&Symbol::word("godfather")).unwrap();
		assert_eq!(godfather.weight(&Symbol::End), Some(1));
		assert_eq!(godfather.len(), 1);
	}

	#[test]
	fn repeated_transitions_accumulate() {
		let chain = ChainBuilder::build(["the end", "the end", "the night"]);
		let the = chain.edges(&Symbol::word("the")).unwrap();
		assert_eq!(the.weight(&Symbol::word("end")), Some(2));
		assert_eq!(the.weight(&Symbol::word("night")), Some(1));

		let start = chain.edges(&Symbol::Start).unwrap();
		assert_eq!(start.weight(&Symbol::word("the")), Some(3));
	}

	#[test]
	fn repeated_word_loops_on_itself() {
		let chain = ChainBuilder::build(["the the"]);
		let the = chain.edges(&Symbol::word("the")).unwrap();
		assert_eq!(the.weight(&Symbol::word("the")), Some(1));
		assert_eq!(the.weight(&Symbol::End), Some(1));
	}

	#[test]
	fn every_word_node_has_outgoing_edges() {
		let chain = ChainBuilder::build([
			"night of the living dead",
			"dawn of the dead",
			"the dead zone",
		]);
		for (symbol, table) in chain.nodes() {
			if symbol != &Symbol::Start {
				assert!(
					!table.is_empty(),
					"node {symbol} has no outgoing edges"
				);
			}
		}
	}

	#[test]
	fn empty_titles_leave_the_chain_untouched() {
		let mut builder = ChainBuilder::new();
		builder.add_title("");
		builder.add_title("   ");
		let chain = builder.finish();
		assert!(chain.is_empty());
		assert!(chain.edges(&Symbol::Start).unwrap().is_empty());
	}

	#[test]
	fn empty_corpus_still_has_a_start_node() {
		let chain = ChainBuilder::build(Vec::<String>::new());
		assert!(chain.contains(&Symbol::Start));
		let parallel = ChainBuilder::build_parallel(Vec::new());
		assert!(parallel.contains(&Symbol::Start));
	}

	#[test]
	fn parallel_build_matches_sequential_counts() {
		let titles: Vec<String> = [
			"the godfather",
			"the godfather part ii",
			"the sting",
			"night of the hunter",
			"night on earth",
			"vertigo",
		]
		.iter()
		.map(|t| t.to_string())
		.collect();

		let sequential = ChainBuilder::build(&titles);
		let parallel = ChainBuilder::build_parallel(titles);
		assert_eq!(sequential, parallel);
	}
}
