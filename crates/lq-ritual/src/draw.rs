//! Slip selection.
//!
//! Draws are uniform over the corpus. When no backend credential is
//! available the draw is restricted to the curated prefix, so the fixed
//! fallback reading always pairs with one of the best-known slips. The
//! restriction is a deliberate content-curation choice, not an error path.

use rand::Rng;
use rand::rngs::StdRng;

/// Pick a slip index, uniform over the corpus or over a curated prefix.
///
/// `curated` restricts the draw to the first `curated` slips when given;
/// the bound is clamped into `1..=len` so the draw range is never empty.
pub fn draw_slip_index(rng: &mut StdRng, len: usize, curated: Option<usize>) -> usize {
    debug_assert!(len > 0, "corpus is validated non-empty");
    let bound = curated.map_or(len, |prefix| prefix.clamp(1, len));
    rng.random_range(0..bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn curated_draws_stay_in_prefix() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            assert!(draw_slip_index(&mut rng, 100, Some(10)) < 10);
        }
    }

    #[test]
    fn unrestricted_draws_cover_full_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let len = 10;
        let mut seen = vec![false; len];
        for _ in 0..10_000 {
            seen[draw_slip_index(&mut rng, len, None)] = true;
        }
        assert!(seen.iter().all(|hit| *hit), "unvisited indices: {seen:?}");
    }

    #[test]
    fn unrestricted_draws_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(1);
        let len = 10;
        let trials = 100_000usize;
        let mut counts = vec![0usize; len];
        for _ in 0..trials {
            counts[draw_slip_index(&mut rng, len, None)] += 1;
        }
        let expected = trials / len;
        for (index, count) in counts.iter().enumerate() {
            let deviation = (*count as f64 - expected as f64).abs() / expected as f64;
            assert!(deviation < 0.1, "index {index}: {count} vs {expected}");
        }
    }

    #[test]
    fn curated_bound_clamps_to_corpus_length() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            assert!(draw_slip_index(&mut rng, 5, Some(10)) < 5);
        }
    }

    #[test]
    fn zero_curated_bound_still_draws_first_slip() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(draw_slip_index(&mut rng, 5, Some(0)), 0);
    }

    #[test]
    fn deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            assert_eq!(
                draw_slip_index(&mut a, 64, None),
                draw_slip_index(&mut b, 64, None)
            );
        }
    }
}
