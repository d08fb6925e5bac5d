//! Policy fill routines for sequence generation.
//!
//! Every policy except few-unique starts from `N` independent uniform draws
//! over the inclusive bounds and arranges them afterwards. The disorder and
//! sample-size heuristics use integer square roots, so no floating-point
//! arithmetic is involved.

use rand::{Rng, rngs::SmallRng};

use crate::{bounds::Bounds, element::Element, policy::Policy};

/// Fills `values` in place according to `policy`.
///
/// Callers validate the bounds and a non-zero length beforehand; the fill
/// itself cannot fail.
pub(crate) fn fill<T: Element>(
    values: &mut [T],
    policy: Policy,
    bounds: Bounds<T>,
    rng: &mut SmallRng,
) {
    match policy {
        Policy::Random => fill_uniform(values, bounds, rng),
        Policy::Sorted => {
            fill_uniform(values, bounds, rng);
            values.sort_unstable();
        }
        Policy::ReverseSorted => {
            fill_uniform(values, bounds, rng);
            values.sort_unstable_by(|left, right| right.cmp(left));
        }
        Policy::NearlySorted => {
            fill_uniform(values, bounds, rng);
            values.sort_unstable();
            perturb(values, rng);
        }
        Policy::FewUnique => fill_few_unique(values, bounds, rng),
    }
}

fn fill_uniform<T: Element>(values: &mut [T], bounds: Bounds<T>, rng: &mut SmallRng) {
    for slot in values.iter_mut() {
        *slot = rng.gen_range(bounds.lower()..=bounds.upper());
    }
}

/// Number of random position swaps applied by the nearly-sorted policy:
/// `floor(sqrt(sqrt(N)))`.
pub(crate) const fn disorder_swaps(length: usize) -> usize {
    length.isqrt().isqrt()
}

/// Number of distinct values available to the few-unique policy:
/// `floor(sqrt(N))`.
pub(crate) const fn sample_len(length: usize) -> usize {
    length.isqrt()
}

/// Swaps [`disorder_swaps`] pairs of independently chosen positions.
///
/// Positions may coincide, producing a no-op swap; the swap count is an upper
/// bound on disorder, not an exact measure.
fn perturb<T: Element>(values: &mut [T], rng: &mut SmallRng) {
    let length = values.len();
    for _ in 0..disorder_swaps(length) {
        let left = rng.gen_range(0..length);
        let right = rng.gen_range(0..length);
        values.swap(left, right);
    }
}

/// Draws a sample of [`sample_len`] values into the leading positions,
/// propagates uniformly chosen sample elements over the remainder, then
/// scatters the sample by swapping each of its positions with a random
/// position anywhere in the buffer.
fn fill_few_unique<T: Element>(values: &mut [T], bounds: Bounds<T>, rng: &mut SmallRng) {
    let length = values.len();
    let sample = sample_len(length);

    for slot in values.iter_mut().take(sample) {
        *slot = rng.gen_range(bounds.lower()..=bounds.upper());
    }
    for index in sample..length {
        let pick = values[rng.gen_range(0..sample)];
        values[index] = pick;
    }
    for position in 0..sample {
        let other = rng.gen_range(0..length);
        values.swap(position, other);
    }
}

#[cfg(test)]
mod tests {
    use super::{disorder_swaps, sample_len};

    #[test]
    fn disorder_swap_count_follows_fourth_root() {
        assert_eq!(disorder_swaps(1), 1);
        assert_eq!(disorder_swaps(15), 1);
        assert_eq!(disorder_swaps(16), 2);
        assert_eq!(disorder_swaps(100), 3);
        assert_eq!(disorder_swaps(625), 5);
    }

    #[test]
    fn sample_size_follows_square_root() {
        assert_eq!(sample_len(1), 1);
        assert_eq!(sample_len(20), 4);
        assert_eq!(sample_len(100), 10);
    }
}
