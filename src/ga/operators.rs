//! Variation and selection operators on permutation tours.
//!
//! - [`random_order`] — uniform random permutation (Fisher–Yates)
//! - [`tournament`] — binary tournament selection
//! - [`single_point_crossover`] — prefix of one parent, order-preserving
//!   fill from the other
//! - [`invert_segment`] — reverse the sub-tour between two random positions

use rand::Rng;

use super::chromosome::Tour;

/// Returns a uniformly random permutation of `0..n`.
pub fn random_order<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    for i in (1..order.len()).rev() {
        let j = rng.random_range(0..=i);
        order.swap(i, j);
    }
    order
}

/// Draws two tours uniformly with replacement and returns the cheaper one
/// (the first drawn on ties).
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn tournament<'a, R: Rng>(population: &'a [Tour], rng: &mut R) -> &'a Tour {
    let a = &population[rng.random_range(0..population.len())];
    let b = &population[rng.random_range(0..population.len())];
    if b.cost() < a.cost() {
        b
    } else {
        a
    }
}

/// Single-point order-preserving crossover.
///
/// Copies `first[..cut]` for a random `cut` in `0..n`, then appends the
/// genes of `second` in their order, skipping those already placed. The
/// child is a permutation whenever both parents are permutations of
/// `0..n`; genes outside `0..n` and repeats are dropped.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_logistics::ga::single_point_crossover;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let child = single_point_crossover(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], &mut rng);
/// let mut sorted = child.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
/// ```
pub fn single_point_crossover<R: Rng>(first: &[usize], second: &[usize], rng: &mut R) -> Vec<usize> {
    let n = first.len();
    if n == 0 {
        return Vec::new();
    }
    let cut = rng.random_range(0..n);
    splice_at(first, second, cut)
}

fn splice_at(first: &[usize], second: &[usize], cut: usize) -> Vec<usize> {
    let n = first.len();
    let mut placed = vec![false; n];
    let mut child = Vec::with_capacity(n);
    for &gene in first[..cut].iter().chain(second) {
        if let Some(seen) = placed.get_mut(gene) {
            if !*seen {
                *seen = true;
                child.push(gene);
            }
        }
    }
    child
}

/// With probability `rate`, reverses the segment between two random
/// positions (inclusive). Returns whether the tour was touched.
pub fn invert_segment<R: Rng>(tour: &mut Tour, rate: f64, rng: &mut R) -> bool {
    let n = tour.len();
    if n < 2 || rng.random::<f64>() >= rate {
        return false;
    }
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    tour.order_mut()[lo..=hi].reverse();
    true
}
