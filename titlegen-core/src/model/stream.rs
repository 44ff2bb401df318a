use std::collections::HashSet;

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::error::Result;
use crate::model::chain::Chain;
use crate::model::walker::{Seed, walk};

/// An infinite, pull-based stream of titles that never repeats itself.
///
/// Each pull performs walks until one produces a title that is neither
/// the seed itself nor anything this stream instance already emitted,
/// records it, and yields it. Nothing is generated ahead of demand and
/// no look-ahead is buffered; dropping the stream at any point needs no
/// cleanup.
///
/// # Notes
/// - Duplicate walks are discarded and retried silently; under a
///   sparse chain this can spin for a long time, which is the intended
///   behavior unless [`Self::with_max_attempts`] installs a cap.
/// - The seen set grows for the life of the stream and is never
///   persisted or shared. Restarting means building a new instance.
/// - Walk errors are yielded to the caller rather than retried; every
///   one of them is fatal for the underlying chain.
pub struct UniqueStream<'a, R: Rng> {
	chain: &'a Chain,
	seed: Seed,
	rng: R,
	/// Titles already emitted, pre-seeded with the seed's own text so
	/// a degenerate walk can never surface it.
	seen: HashSet<String>,
	/// Consecutive rejected walks allowed per pull before the stream
	/// gives up and ends. `None` retries forever.
	max_attempts: Option<usize>,
}

impl<'a, R: Rng> UniqueStream<'a, R> {
	/// Creates a stream drawing titles from `chain` starting at `seed`,
	/// sampling with `rng`.
	pub fn new(chain: &'a Chain, seed: Seed, rng: R) -> Self {
		let mut seen = HashSet::new();
		seen.insert(seed.rendered());
		Self {
			chain,
			seed,
			rng,
			seen,
			max_attempts: None,
		}
	}

	/// Caps the number of consecutive rejected walks tolerated per
	/// pull. When the cap is hit the stream ends instead of spinning,
	/// a deviation from the unbounded default for callers that prefer
	/// an exhausted stream over a stuck one.
	pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
		self.max_attempts = Some(max_attempts);
		self
	}

	/// Number of titles emitted so far.
	pub fn emitted(&self) -> usize {
		// The pre-seeded seed text is not an emission.
		self.seen.len() - 1
	}
}

impl<'a, R: Rng> Iterator for UniqueStream<'a, R> {
	type Item = Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		let mut attempts = 0usize;
		loop {
			let title = match walk(self.chain, &self.seed, &mut self.rng) {
				Ok(title) => title,
				Err(err) => return Some(Err(err)),
			};

			if self.seen.contains(&title) {
				attempts += 1;
				if self.max_attempts.is_some_and(|cap| attempts >= cap) {
					return None;
				}
				continue;
			}

			self.seen.insert(title.clone());
			return Some(Ok(title));
		}
	}
}

/// Convenience constructor using the thread-local random generator.
pub fn stream(chain: &Chain, seed: Seed) -> UniqueStream<'_, ThreadRng> {
	UniqueStream::new(chain, seed, rand::rng())
}
