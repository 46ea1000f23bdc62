//! Property tests for the greedy wrap engine.
//!
//! Widths, heights and spacing are whole numbers so every sum is exact.

use proptest::prelude::*;
use quickfeed::wrap::{wrap, LayoutToken};

fn arb_tokens() -> impl Strategy<Value = Vec<LayoutToken>> {
    prop::collection::vec((1u16..40, 1u16..4), 0..60).prop_map(|extents| {
        extents
            .into_iter()
            .enumerate()
            .map(|(i, (w, h))| LayoutToken::new(format!("t{}", i), f32::from(w), f32::from(h)))
            .collect()
    })
}

proptest! {
    #[test]
    fn every_token_placed_once_in_order(
        tokens in arb_tokens(),
        max_width in 1u16..80,
        spacing in 0u16..4,
    ) {
        let layout = wrap(&tokens, f32::from(max_width), f32::from(spacing));
        let indices: Vec<usize> = layout
            .rows
            .iter()
            .flat_map(|row| row.placements.iter().map(|p| p.index))
            .collect();
        prop_assert_eq!(indices, (0..tokens.len()).collect::<Vec<_>>());
    }

    #[test]
    fn rows_are_non_empty_and_fit(
        tokens in arb_tokens(),
        max_width in 1u16..80,
        spacing in 0u16..4,
    ) {
        let max_width = f32::from(max_width);
        let layout = wrap(&tokens, max_width, f32::from(spacing));
        for row in &layout.rows {
            prop_assert!(!row.is_empty());
            if row.len() > 1 {
                prop_assert!(row.width() <= max_width);
            }
        }
    }

    #[test]
    fn rows_are_filled_greedily(
        tokens in arb_tokens(),
        max_width in 1u16..80,
        spacing in 0u16..4,
    ) {
        let spacing = f32::from(spacing);
        let max_width = f32::from(max_width);
        let layout = wrap(&tokens, max_width, spacing);
        for pair in layout.rows.windows(2) {
            let next = &pair[1].placements[0].token;
            prop_assert!(pair[0].width() + spacing + next.width > max_width);
        }
    }

    #[test]
    fn height_sums_rows_and_gaps(
        tokens in arb_tokens(),
        max_width in 1u16..80,
        spacing in 0u16..4,
    ) {
        let spacing = f32::from(spacing);
        let layout = wrap(&tokens, f32::from(max_width), spacing);
        let expected = if layout.rows.is_empty() {
            0.0
        } else {
            layout.rows.iter().map(|r| r.height).sum::<f32>()
                + spacing * (layout.rows.len() - 1) as f32
        };
        prop_assert_eq!(layout.height, expected);
        for pair in layout.rows.windows(2) {
            prop_assert_eq!(pair[1].y, pair[0].y + pair[0].height + spacing);
        }
    }

    #[test]
    fn wrapping_is_deterministic(
        tokens in arb_tokens(),
        max_width in 1u16..80,
        spacing in 0u16..4,
    ) {
        let a = wrap(&tokens, f32::from(max_width), f32::from(spacing));
        let b = wrap(&tokens, f32::from(max_width), f32::from(spacing));
        prop_assert_eq!(a, b);
    }
}
