//! Property-based tests for the queue controller
//!
//! Uses proptest to verify the transport invariants across many random
//! queues and operation sequences.

use encore_core::{ItemId, PlayableItem};
use encore_playback::{PlaybackConfig, PlaybackQueueController};
use proptest::prelude::*;

// ===== Helpers =====

fn item(id: &str) -> PlayableItem {
    PlayableItem::new(id, format!("Song {}", id)).with_audio(format!("/media/{}.mp3", id))
}

/// Queue of `n` items with distinct ids
fn distinct_queue(n: usize) -> Vec<PlayableItem> {
    (0..n).map(|i| item(&format!("q{}", i))).collect()
}

#[derive(Debug, Clone)]
enum Op {
    Select(usize),
    SelectNew(u16),
    Toggle,
    Advance,
    Retreat,
    Shuffle,
    Progress(f64),
    Seek(f64),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..10).prop_map(Op::Select),
        any::<u16>().prop_map(Op::SelectNew),
        Just(Op::Toggle),
        Just(Op::Advance),
        Just(Op::Retreat),
        Just(Op::Shuffle),
        (-10.0f64..600.0).prop_map(Op::Progress),
        (0.0f64..600.0).prop_map(Op::Seek),
    ]
}

fn check_invariants(controller: &PlaybackQueueController) -> Result<(), TestCaseError> {
    let len = controller.queue_len();
    match controller.current_index() {
        Some(index) => prop_assert!(index < len, "index {} out of range {}", index, len),
        None => prop_assert_eq!(len, 0),
    }

    if len == 0 {
        prop_assert!(controller.current_item().is_none());
        prop_assert!(!controller.is_playing());
    }
    Ok(())
}

// ===== Property Tests =====

proptest! {
    /// Property: index stays valid and the empty-queue invariant holds
    #[test]
    fn invariants_hold_under_any_sequence(
        seed in any::<u64>(),
        size in 0usize..6,
        ops in prop::collection::vec(arbitrary_op(), 1..60)
    ) {
        let mut controller = PlaybackQueueController::with_seed(PlaybackConfig::default(), seed);
        let queue = distinct_queue(size);
        if let Some(first) = queue.first().cloned() {
            controller.select_and_play(first, Some(queue.clone()));
        }
        check_invariants(&controller)?;

        for op in ops {
            match op {
                Op::Select(i) => {
                    if let Some(target) = queue.get(i % queue.len().max(1)).cloned() {
                        controller.select_and_play(target, None);
                    }
                }
                Op::SelectNew(n) => controller.select_and_play(item(&format!("new{}", n)), None),
                Op::Toggle => controller.toggle_play(),
                Op::Advance => controller.advance(),
                Op::Retreat => controller.retreat(),
                Op::Shuffle => controller.toggle_shuffle(),
                Op::Progress(s) => controller.report_progress(s),
                Op::Seek(s) => {
                    let pulse = controller.seek(s);
                    controller.clear_seek(pulse);
                }
            }
            check_invariants(&controller)?;
        }
    }

    /// Property: selecting unseen items grows the queue by one and lands on them
    #[test]
    fn selecting_unseen_items_appends(ids in prop::collection::hash_set("[a-z]{1,8}", 1..30)) {
        let mut controller = PlaybackQueueController::default();

        for (n, id) in ids.iter().enumerate() {
            let before = controller.queue_len();
            controller.select_and_play(item(id), None);

            prop_assert_eq!(controller.queue_len(), before + 1);
            prop_assert_eq!(controller.current_index(), Some(n));
            prop_assert_eq!(controller.current_id().map(ItemId::as_str), Some(id.as_str()));
        }
    }

    /// Property: re-selecting the current item only flips the transport flag
    #[test]
    fn reselect_toggles_only(size in 1usize..10, pick in 0usize..10, progress in 0.0f64..500.0) {
        let queue = distinct_queue(size);
        let target = queue[pick % size].clone();

        let mut controller = PlaybackQueueController::default();
        controller.select_and_play(target.clone(), Some(queue));
        controller.report_progress(progress);

        let index = controller.current_index();
        let playing = controller.is_playing();

        controller.select_and_play(target.clone(), None);
        prop_assert_eq!(controller.current_index(), index);
        prop_assert_eq!(controller.is_playing(), !playing);
        prop_assert_eq!(controller.progress_seconds(), progress);

        controller.select_and_play(target, None);
        prop_assert_eq!(controller.is_playing(), playing);
    }

    /// Property: non-shuffled advance cycles 0..N and wraps
    #[test]
    fn advance_cycles_in_order(size in 2usize..12, laps in 1usize..4) {
        let queue = distinct_queue(size);
        let mut controller = PlaybackQueueController::default();
        controller.select_and_play(queue[0].clone(), Some(queue));

        for step in 1..=(size * laps) {
            controller.advance();
            prop_assert_eq!(controller.current_index(), Some(step % size));
            prop_assert_eq!(controller.progress_seconds(), 0.0);
            prop_assert!(controller.is_playing());
        }
    }

    /// Property: single-item advance restarts regardless of shuffle
    #[test]
    fn single_item_advance_restarts(seed in any::<u64>(), shuffle in any::<bool>(), progress in 0.0f64..300.0) {
        let config = PlaybackConfig { shuffle, ..Default::default() };
        let mut controller = PlaybackQueueController::with_seed(config, seed);
        controller.select_and_play(item("solo"), None);
        controller.report_progress(progress);

        controller.advance();
        prop_assert_eq!(controller.current_index(), Some(0));
        prop_assert_eq!(controller.current_id().map(ItemId::as_str), Some("solo"));
        prop_assert_eq!(controller.progress_seconds(), 0.0);
    }

    /// Property: shuffled advance never repeats immediately when it can avoid it
    #[test]
    fn shuffled_advance_never_repeats(seed in any::<u64>(), size in 2usize..10, steps in 1usize..50) {
        let queue = distinct_queue(size);
        let config = PlaybackConfig { shuffle: true, ..Default::default() };
        let mut controller = PlaybackQueueController::with_seed(config, seed);
        controller.select_and_play(queue[0].clone(), Some(queue.clone()));

        for _ in 0..steps {
            let before = controller.current_index();
            controller.advance();
            prop_assert_ne!(controller.current_index(), before);
        }

        let ids: Vec<ItemId> = controller.queue().iter().map(|i| i.id.clone()).collect();
        let original: Vec<ItemId> = queue.iter().map(|i| i.id.clone()).collect();
        prop_assert_eq!(ids, original, "shuffle reordered the queue");
    }

    /// Property: retreat past the threshold restarts instead of moving
    #[test]
    fn retreat_past_threshold_restarts(size in 1usize..10, pick in 0usize..10, progress in 3.001f64..1000.0) {
        let queue = distinct_queue(size);
        let mut controller = PlaybackQueueController::default();
        controller.select_and_play(queue[pick % size].clone(), Some(queue));
        controller.report_progress(progress);

        let index = controller.current_index();
        controller.retreat();

        prop_assert_eq!(controller.current_index(), index);
        prop_assert_eq!(controller.pending_seek_seconds(), Some(0.0));
    }

    /// Property: retreat within the threshold steps back one, wrapping at 0
    #[test]
    fn retreat_within_threshold_steps_back(size in 1usize..10, pick in 0usize..10, progress in 0.0f64..=3.0) {
        let queue = distinct_queue(size);
        let k = pick % size;
        let mut controller = PlaybackQueueController::default();
        controller.select_and_play(queue[k].clone(), Some(queue));
        controller.report_progress(progress);

        controller.retreat();

        let expected = if k == 0 { size - 1 } else { k - 1 };
        prop_assert_eq!(controller.current_index(), Some(expected));
        prop_assert_eq!(controller.progress_seconds(), 0.0);
        prop_assert!(controller.pending_seek_seconds().is_none());
    }
}
