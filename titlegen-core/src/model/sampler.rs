use rand::Rng;

use crate::error::{Result, TitlegenError};

/// Returns one item from `pairs` chosen with probability proportional
/// to its weight.
///
/// The draw is a real value in `[0, total)` where `total` is the sum of
/// all weights; the pairs are then scanned with a running cumulative sum
/// until the drawn value falls inside an item's bucket. Equal weights
/// degrade to a uniform pick, and a single pair is always returned
/// regardless of its weight.
///
/// # Errors
/// `SamplerExhausted` when `pairs` is empty or carries no weight. A
/// non-empty, positively weighted input always selects exactly one item;
/// failing to do so would be a bug in the accumulation below, and is
/// reported rather than recovered.
pub fn weighted_choice<'a, T, R: Rng + ?Sized>(
	pairs: &[(&'a T, usize)],
	rng: &mut R,
) -> Result<&'a T> {
	let total: usize = pairs.iter().map(|(_, weight)| weight).sum();
	if total == 0 {
		// Covers the empty input as well; weights are never zero in a
		// built chain.
		return Err(TitlegenError::SamplerExhausted);
	}

	let draw = rng.random_range(0.0..total as f64);
	pick(pairs, draw)
}

/// Scans `pairs` accumulating weights until the bucket holding `draw`
/// is found.
///
/// Kept separate from the drawing so the `draw == total` boundary can be
/// exercised directly: the `>=` comparison guarantees the last pair is
/// selected even for that supremum value, which a real draw from the
/// half-open interval cannot produce.
fn pick<'a, T>(pairs: &[(&'a T, usize)], draw: f64) -> Result<&'a T> {
	let mut upto = 0.0;
	for &(item, weight) in pairs {
		if upto + weight as f64 >= draw {
			return Ok(item);
		}
		upto += weight as f64;
	}
	Err(TitlegenError::SamplerExhausted)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn single_pair_always_wins() {
		let x = "x";
		let pairs = [(&x, 5usize)];
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..50 {
			assert_eq!(weighted_choice(&pairs, &mut rng).unwrap(), &"x");
		}
	}

	#[test]
	fn frequencies_follow_weights() {
		let a = "a";
		let b = "b";
		let pairs = [(&a, 1usize), (&b, 3usize)];
		let mut rng = StdRng::seed_from_u64(42);

		let trials = 10_000;
		let mut b_hits = 0usize;
		for _ in 0..trials {
			if weighted_choice(&pairs, &mut rng).unwrap() == &"b" {
				b_hits += 1;
			}
		}

		let freq = b_hits as f64 / trials as f64;
		assert!(
			(0.72..=0.78).contains(&freq),
			"expected ~0.75, observed {freq}"
		);
	}

	#[test]
	fn draw_at_total_selects_the_last_pair() {
		let a = "a";
		let b = "b";
		let pairs = [(&a, 2usize), (&b, 3usize)];
		assert_eq!(pick(&pairs, 5.0).unwrap(), &"b");
	}

	#[test]
	fn draw_at_zero_selects_the_first_pair() {
		let a = "a";
		let b = "b";
		let pairs = [(&a, 2usize), (&b, 3usize)];
		assert_eq!(pick(&pairs, 0.0).unwrap(), &"a");
	}

	#[test]
	fn empty_input_is_exhaustion() {
		let pairs: [(&&str, usize); 0] = [];
		let mut rng = StdRng::seed_from_u64(1);
		assert!(matches!(
			weighted_choice(&pairs, &mut rng),
			Err(TitlegenError::SamplerExhausted)
		));
	}

	#[test]
	fn zero_weights_are_exhaustion() {
		let a = "a";
		let pairs = [(&a, 0usize)];
		let mut rng = StdRng::seed_from_u64(1);
		assert!(matches!(
			weighted_choice(&pairs, &mut rng),
			Err(TitlegenError::SamplerExhausted)
		));
	}
}
