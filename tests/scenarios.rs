//! End-to-end board behavior through the public API.

use crossbeam_channel::unbounded;
use flapboard::{
    pad_value, Content, ContentDisplay, ContentEntry, DisplayOptions, FixedDisplay, FixedOptions, FlapEvent,
    PadMode, Preset, Symbol, TileAnimator,
};
use proptest::prelude::*;
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(25);

/// Polls `tile` one interval at a time until it stops; returns the poll count.
fn run(tile: &mut TileAnimator, start: Instant) -> usize {
    let mut now = start;
    let mut polls = 0;
    while tile.is_animating() {
        now += TICK;
        assert!(tile.poll(now));
        polls += 1;
    }
    polls
}

#[test]
fn short_numeric_value_is_right_aligned() {
    let now = Instant::now();
    let options = FixedOptions::new(3).with_timing(TICK);
    let display = FixedDisplay::new_at("5", options, now).unwrap();

    assert_eq!(display.row_value().text(), "  5");
    let targets: Vec<usize> = display.row().tiles().iter().map(|t| t.cursor().target).collect();
    assert_eq!(targets, vec![0, 0, 6]);
}

#[test]
fn symbol_outside_alphabet_lands_on_transient_entry() {
    let now = Instant::now();
    let options = FixedOptions::new(6)
        .with_symbols(Preset::Alphanum)
        .with_timing(TICK);
    let mut display = FixedDisplay::new_at("HELLO!", options, now).unwrap();

    let bang = &display.row().tiles()[5];
    assert_eq!(bang.cursor().target, 37);
    assert_eq!(bang.transient(), Some(&Symbol::text("!")));
    // The shared preset is untouched.
    assert_eq!(Preset::Alphanum.symbols().len(), 37);

    let mut now = now;
    let mut polls = 0;
    while !display.is_settled() {
        now += TICK;
        display.poll(now);
        polls += 1;
    }
    // One immediate step plus one per interval through all 37 entries.
    assert_eq!(polls, 37);
    let last = display.frames().pop().unwrap();
    assert_eq!(last.current, Some(Symbol::text("!")));
    assert!(last.is_final);
}

#[test]
fn content_display_wraps_forward_in_one_step() {
    let now = Instant::now();
    let entries = vec![
        ContentEntry::new("a", Content::new("Arrivals")),
        ContentEntry::new("b", Content::new("Boarding")),
    ];
    let options = DisplayOptions::default().with_timing(TICK);
    let mut display = ContentDisplay::new_at(entries, "b", options, now).unwrap();
    let mut later = now;
    while !display.is_settled() {
        later += TICK;
        display.poll(later);
    }

    let (tx, rx) = unbounded();
    display.observe(tx);
    display.set_display_id("a", later);

    let events: Vec<FlapEvent> = rx.try_iter().collect();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[1], FlapEvent::Settled { position: 0 }));
    assert!(display.frame().is_final);
    assert_eq!(display.next_due(), None);
}

#[test]
fn final_tile_schedules_nothing() {
    let now = Instant::now();
    let mut tile = TileAnimator::new(Preset::Num.symbols(), TICK).unwrap();
    tile.request("3".into(), now);
    run(&mut tile, now);

    assert!(tile.is_final());
    assert_eq!(tile.next_due(), None);
    assert!(!tile.poll(now + TICK * 100));

    tile.request("3".into(), now);
    assert_eq!(tile.next_due(), None);
}

proptest! {
    #[test]
    fn padding_is_idempotent(value in "[0-9A-Z .,+-]{0,12}", length in 1usize..16) {
        for mode in [PadMode::Auto, PadMode::Start, PadMode::End] {
            let once = pad_value(&value, length, ' ', mode);
            prop_assert_eq!(pad_value(&once, length, ' ', mode), once.clone());
            prop_assert_eq!(once.chars().count(), length);
        }
    }

    #[test]
    fn steps_follow_forward_distance(current in 0usize..11, target in 0usize..11) {
        let now = Instant::now();
        let mut tile = TileAnimator::new(Preset::Num.symbols(), TICK).unwrap();
        tile.request_index(current, now);
        run(&mut tile, now);

        let (tx, rx) = unbounded();
        tile.observe(tx);
        tile.request_index(target, now);
        run(&mut tile, now);

        let steps = rx.try_iter().filter(|e| matches!(e, FlapEvent::Stepped { .. })).count();
        prop_assert_eq!(steps, (target + 11 - current) % 11);
        prop_assert_eq!(tile.cursor().current, Some(target));
    }

    #[test]
    fn fresh_tile_takes_target_plus_one_steps(target in 0usize..37) {
        let now = Instant::now();
        let mut tile = TileAnimator::new(Preset::Alphanum.symbols(), TICK).unwrap();
        tile.request_index(target, now);
        // The immediate step is not a poll.
        prop_assert_eq!(run(&mut tile, now) + 1, target + 1);
    }
}
