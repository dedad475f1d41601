//! Shuffle pick
//!
//! Shuffle never reorders the queue. It only changes how the next index is
//! chosen: a uniform random index with a best-effort guard against replaying
//! the current item immediately.

use rand::Rng;

/// Pick the next index in shuffle mode
///
/// Draws uniformly from `[0, len)`. If the draw lands on `current` and there
/// is more than one item, steps one position forward (wrapping). This is not
/// a no-repeat-until-exhausted shuffle: an item can come back two picks later.
///
/// Returns `None` for an empty queue.
pub fn pick_shuffled_index<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    current: Option<usize>,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let mut index = rng.gen_range(0..len);
    if Some(index) == current && len > 1 {
        index = (index + 1) % len;
    }

    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn empty_queue_has_no_pick() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_shuffled_index(&mut rng, 0, None), None);
    }

    #[test]
    fn single_item_always_picks_itself() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            assert_eq!(pick_shuffled_index(&mut rng, 1, Some(0)), Some(0));
        }
    }

    #[test]
    fn never_repeats_current_when_alternatives_exist() {
        let mut rng = StdRng::seed_from_u64(3);
        for len in 2..8 {
            for current in 0..len {
                for _ in 0..100 {
                    let pick = pick_shuffled_index(&mut rng, len, Some(current)).unwrap();
                    assert_ne!(pick, current, "len={} repeated {}", len, current);
                    assert!(pick < len);
                }
            }
        }
    }

    #[test]
    fn reaches_every_other_index() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(pick_shuffled_index(&mut rng, 5, Some(2)).unwrap());
        }

        let expected: HashSet<usize> = [0, 1, 3, 4].into_iter().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn no_current_can_pick_anything() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(pick_shuffled_index(&mut rng, 3, None).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }
}
