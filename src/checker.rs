//! Verifies that a solution is a valid answer for an instance.

use anyhow::{bail, ensure, Result};
use itertools::Itertools;

use crate::instance::{Instance, Solution};

/// Accepts `solution` if it selects at least one element, every index is in
/// `1..=n` and distinct, and the selected values sum to a multiple of `n`.
pub fn check(instance: &Instance, solution: &Solution) -> Result<()> {
    let n = instance.len();
    let indices = &solution.indices;

    ensure!(!indices.is_empty(), "solution selects no elements");
    if let Some(&bad) = indices.iter().find(|&&i| i == 0 || i > n) {
        bail!("index {bad} is outside 1..={n}");
    }
    if let Some(dup) = indices.iter().duplicates().next() {
        bail!("index {dup} is selected more than once");
    }

    let sum = indices
        .iter()
        .fold(0i64, |sum, &i| sum.wrapping_add(instance.numbers[i - 1]));
    ensure!(
        sum % n as i64 == 0,
        "selected values {} sum to {sum}, which is not divisible by {n}",
        indices.iter().map(|&i| instance.numbers[i - 1]).join(" + ")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(numbers: &[i64]) -> Instance {
        Instance::new(numbers.to_vec()).unwrap()
    }

    fn solution(indices: &[usize]) -> Solution {
        Solution {
            indices: indices.to_vec(),
        }
    }

    #[test]
    fn accepts_valid() {
        let inst = instance(&[1, 2, 4]);
        check(&inst, &solution(&[2, 3])).unwrap();
        check(&inst, &solution(&[3, 2])).unwrap();
    }

    #[test]
    fn rejects_invalid() {
        let inst = instance(&[1, 2, 4]);
        let err = |idx: &[usize]| check(&inst, &solution(idx)).unwrap_err().to_string();

        assert!(err(&[]).contains("no elements"));
        assert!(err(&[0]).contains("outside"));
        assert!(err(&[4]).contains("outside"));
        assert!(err(&[2, 2, 3]).contains("more than once"));
        assert!(err(&[1, 2, 3]).contains("not divisible"));
    }

    #[test]
    fn accepts_solver_output() {
        let inst = instance(&[13, -7, 22, 5, 0, 91, 4]);
        check(&inst, &inst.solve()).unwrap();
    }
}
