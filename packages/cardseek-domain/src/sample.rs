use rand::{Rng, seq::SliceRandom};

/// Picks up to `count` distinct elements uniformly at random, without replacement.
///
/// A pool smaller than `count` is returned whole, in random order.
pub fn sample_without_replacement<T, R>(pool: &[T], count: usize, rng: &mut R) -> Vec<T>
where
	T: Clone,
	R: Rng + ?Sized,
{
	pool.choose_multiple(rng, count).cloned().collect()
}
