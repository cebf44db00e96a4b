//! Property tests for panel scrolling.
//!
//! Invariants:
//! 1. `clamp` is idempotent and keeps the offset within
//!    `[0, max(0, item_count - visible_window)]`.
//! 2. With a cursor, the cursor row stays inside the window after any
//!    sequence of moves and resizes.
//! 3. No scrollbar is shown while every item fits.
//! 4. A shown thumb is at least one cell and starts inside the track.

use lazynginx::viewport::{scrollbar_geometry, window_for_height, Reveal, ViewportState};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    Up,
    Down,
    Jump(usize),
    Scroll(isize),
    Resize(usize),
    Reload(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Up),
        Just(Step::Down),
        (0..300usize).prop_map(Step::Jump),
        (-20..20isize).prop_map(Step::Scroll),
        (1..60usize).prop_map(Step::Resize),
        (0..300usize).prop_map(Step::Reload),
    ]
}

fn reveal_strategy() -> impl Strategy<Value = Reveal> {
    prop_oneof![Just(Reveal::Offset), Just(Reveal::Cursor)]
}

fn state_strategy() -> impl Strategy<Value = ViewportState> {
    (0..500usize, 0..600usize, 0..600usize, 0..100usize).prop_map(
        |(item_count, cursor, scroll_offset, visible_window)| ViewportState {
            item_count,
            cursor,
            scroll_offset,
            visible_window,
        },
    )
}

fn cursor_visible(state: &ViewportState) -> bool {
    state.item_count == 0
        || (state.scroll_offset <= state.cursor
            && state.cursor < state.scroll_offset + state.visible_window)
}

proptest! {
    #[test]
    fn clamp_is_idempotent(state in state_strategy(), window in 0..100usize, reveal in reveal_strategy()) {
        let once = state.clamp(window, reveal);
        prop_assert_eq!(once.clamp(window, reveal), once);
    }

    #[test]
    fn clamp_bounds_offset(state in state_strategy(), window in 0..100usize, reveal in reveal_strategy()) {
        let clamped = state.clamp(window, reveal);
        prop_assert!(clamped.scroll_offset <= clamped.item_count.saturating_sub(window));
        prop_assert_eq!(clamped.visible_window, window);
        if clamped.item_count > 0 {
            prop_assert!(clamped.cursor < clamped.item_count);
        }
    }

    #[test]
    fn cursor_stays_visible(
        item_count in 0..300usize,
        window in 1..60usize,
        steps in prop::collection::vec(step_strategy(), 0..40),
    ) {
        let mut state = ViewportState::new(item_count).clamp(window, Reveal::Cursor);
        for step in steps {
            match step {
                Step::Up => {
                    state.select_previous();
                }
                Step::Down => {
                    state.select_next();
                }
                Step::Jump(index) => {
                    state.select(index);
                }
                Step::Scroll(delta) => {
                    state.scroll_by(delta);
                    // The next frame pulls the window back to the cursor.
                    state = state.clamp(state.visible_window, Reveal::Cursor);
                }
                Step::Resize(window) => state = state.clamp(window, Reveal::Cursor),
                Step::Reload(count) => state.set_item_count(count),
            }
            prop_assert!(cursor_visible(&state), "cursor hidden after {:?}: {:?}", step, state);
            prop_assert!(state.visible_range().len() <= state.visible_window);
        }
    }

    #[test]
    fn no_scrollbar_when_everything_fits(
        window in 0..200usize,
        offset in 0..200usize,
        track in 0..200usize,
        shortfall in 0..200usize,
    ) {
        let item_count = window.saturating_sub(shortfall);
        prop_assert_eq!(scrollbar_geometry(item_count, window, offset, track), None);
    }

    #[test]
    fn thumb_is_never_degenerate(
        item_count in 1..100_000usize,
        window in 0..200usize,
        track in 1..200usize,
        offset_seed in 0..100_000usize,
    ) {
        prop_assume!(item_count > window);
        let offset = offset_seed % (item_count - window + 1);
        let geometry = scrollbar_geometry(item_count, window, offset, track);

        prop_assert!(geometry.is_some());
        if let Some(geometry) = geometry {
            prop_assert!(geometry.thumb_size >= 1);
            prop_assert!(geometry.thumb_start < track);
            prop_assert!(geometry.visible_thumb().end <= track);
        }
    }

    #[test]
    fn window_never_below_minimum(height in -20..400i32) {
        let window = window_for_height(height);
        prop_assert!(window >= 3);
        if height >= 7 {
            prop_assert_eq!(i32::try_from(window).ok(), Some(height - 4));
        }
    }
}

#[test]
fn test_thumb_halfway_through_hundred_items() {
    let geometry = scrollbar_geometry(100, 10, 50, 20).expect("list overflows");
    assert_eq!(geometry.thumb_size, 2);
    assert_eq!(geometry.thumb_start, 10);
    assert_eq!(geometry.thumb_end(), 12);
}

#[test]
fn test_thumb_end_may_pass_track() {
    // An offset past the last full page pushes the thumb off the track;
    // only the drawn cells are clipped.
    let geometry = scrollbar_geometry(10, 2, 9, 10).expect("list overflows");
    assert_eq!(geometry.thumb_start, 9);
    assert_eq!(geometry.thumb_size, 2);
    assert_eq!(geometry.thumb_end(), 11);
    assert_eq!(geometry.visible_thumb(), 9..10);
}

#[test]
fn test_shrinking_window_follows_cursor() {
    let mut state = ViewportState::new(50).clamp(20, Reveal::Cursor);
    state.select(15);
    assert_eq!(state.scroll_offset, 0);

    let state = state.clamp(10, Reveal::Cursor);
    assert_eq!(state.scroll_offset, 6, "cursor becomes the last visible row");
    assert_eq!(state.visible_range(), 6..16);
}

#[test]
fn test_text_panel_keeps_offset_on_growth() {
    let state = ViewportState {
        item_count: 40,
        cursor: 0,
        scroll_offset: 30,
        visible_window: 10,
    };
    let grown = state.clamp(25, Reveal::Offset);
    assert_eq!(grown.scroll_offset, 15, "offset clamps to the new maximum");
    assert_eq!(grown.scroll_offset, grown.clamp(25, Reveal::Offset).scroll_offset);
}
