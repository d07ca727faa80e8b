//! Exhaustive search over subset bitmasks.
//!
//! Every non-empty subset of `n` elements is encoded as a mask in
//! `1..2^n`, bit `i` standing for element `i`. The search walks the masks in
//! ascending order and keeps the last one whose subset sum is divisible by
//! `n`, so the winner is always the numerically largest qualifying mask.

use std::fmt;

use crate::instance::Solution;

/// Longest input the search accepts: `1 << n` has to fit in a `u64`.
pub const MAX_LEN: usize = 63;

/// Subset of element positions, bit `i` set when element `i` is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mask(pub u64);

impl Mask {
    /// No element selected. Also what the search reports when nothing qualifies.
    pub const EMPTY: Mask = Mask(0);

    /// Mask selecting the first `n` elements.
    ///
    /// # Panics
    /// Panics if `n > MAX_LEN`.
    pub fn full(n: usize) -> Mask {
        assert!(n <= MAX_LEN, "mask over {n} elements does not fit in u64");
        Mask((1u64 << n) - 1)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, i: usize) -> bool {
        i < 64 && (self.0 >> i) & 1 == 1
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// 1-based positions of the selected elements among the first `n`, ascending.
    pub fn indices(self, n: usize) -> impl Iterator<Item = usize> {
        (0..n.min(64)).filter(move |&i| self.contains(i)).map(|i| i + 1)
    }
}

impl fmt::Binary for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// Sum of the elements selected by `mask`. Wraps on overflow.
pub fn subset_sum(numbers: &[i64], mask: Mask) -> i64 {
    numbers
        .iter()
        .enumerate()
        .filter(|&(i, _)| mask.contains(i))
        .fold(0i64, |sum, (_, &x)| sum.wrapping_add(x))
}

/// Whether the subset selected by `mask` sums to a multiple of `numbers.len()`.
pub fn qualifies(numbers: &[i64], mask: Mask) -> bool {
    let n = numbers.len() as i64;
    n != 0 && subset_sum(numbers, mask) % n == 0
}

/// Largest non-empty mask whose subset sum is divisible by `numbers.len()`.
///
/// Returns [`Mask::EMPTY`] when no mask qualifies, which for an empty input
/// is always the case.
///
/// # Panics
/// Panics if `numbers.len() > MAX_LEN`.
pub fn best_mask(numbers: &[i64]) -> Mask {
    let n = numbers.len();
    assert!(n <= MAX_LEN, "cannot search {n} elements, limit is {MAX_LEN}");

    let mut best = Mask::EMPTY;
    for mask in (1..1u64 << n).map(Mask) {
        if qualifies(numbers, mask) {
            best = mask;
        }
    }
    best
}

/// Runs the search and decodes the winning mask into 1-based indices.
pub fn solve(numbers: &[i64]) -> Solution {
    Solution::from_mask(best_mask(numbers), numbers.len())
}
