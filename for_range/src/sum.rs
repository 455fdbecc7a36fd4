//! The measured workload: a plain `for` loop over a range that accumulates
//! its counter through a function call per step.
//!
//! The loop is deliberately *not* replaced by `n * (n - 1) / 2`. What is being
//! timed is the loop and the call overhead, so both have to survive
//! optimisation:
//!
//! - [`add`] is never inlined, every step pays for a real call.
//! - The running total goes through [`black_box`] each iteration, which keeps
//!   LLVM from recognising the induction and folding it into the closed form.

use std::hint::black_box;

/// Adds two totals.
#[inline(never)]
pub fn add(left: u128, right: u128) -> u128 {
    left + right
}

/// Sums every integer in `0..iteration` by sequential accumulation.
///
/// The result is `u128`, which holds the sum for any `u64` bound, so the
/// accumulation can not overflow.
pub fn sum_it_up(iteration: u64) -> u128 {
    let mut total = 0;
    for i in 0..iteration {
        total = black_box(add(total, u128::from(i)));
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ITERATION;

    fn closed_form(n: u64) -> u128 {
        let n = u128::from(n);
        if n == 0 { 0 } else { n * (n - 1) / 2 }
    }

    #[test]
    fn known_values() {
        assert_eq!(sum_it_up(10), 45);
        assert_eq!(sum_it_up(0), 0);
        assert_eq!(sum_it_up(1), 0);
        assert_eq!(sum_it_up(ITERATION), 12_497_500);
    }

    #[test]
    fn matches_closed_form() {
        for n in (0..2_000).chain([65_535, 65_536, 1_000_003]) {
            assert_eq!(sum_it_up(n), closed_form(n), "n = {n}");
        }
    }

    #[test]
    fn is_idempotent() {
        let first = sum_it_up(ITERATION);
        let second = sum_it_up(ITERATION);
        assert_eq!(first, second);
    }

    #[test]
    fn add_does_not_overflow_near_u64_max() {
        let big = u128::from(u64::MAX);
        assert_eq!(add(big, big), big * 2);
    }
}
