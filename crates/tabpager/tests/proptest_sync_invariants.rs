//! Property-based invariant tests for the bar/pager composite.
//!
//! 1. After any drag, the bar's selection equals the pager's index
//! 2. The indicator always rests inside the strip's content width
//! 3. Tab taps land the pager on the tapped page

mod common;

use common::{PAGE_WIDTH, tab_pager};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// A drag gesture: offsets visited, then whether it decelerates.
fn gesture(count: usize) -> impl Strategy<Value = (Vec<f64>, bool)> {
    let max = (count as f64 - 1.0) * PAGE_WIDTH;
    (prop::collection::vec(0f64..=max, 1..12), any::<bool>())
}

fn drag_script() -> impl Strategy<Value = (usize, Vec<(Vec<f64>, bool)>)> {
    (2usize..8).prop_flat_map(|count| (Just(count), prop::collection::vec(gesture(count), 1..5)))
}

// ═══════════════════════════════════════════════════════════════════════
// 1-2. Selection and indicator follow drags
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bar_tracks_pager((count, gestures) in drag_script()) {
        let mut tabs = tab_pager(count);
        for (offsets, decelerate) in gestures {
            tabs.will_begin_dragging();
            for offset in offsets {
                tabs.set_content_offset(offset);
                let pager_index = tabs.pager().cur_index().unwrap();
                prop_assert_eq!(tabs.bar().cur_index(), pager_index);
            }
            tabs.did_end_dragging(decelerate);
            if decelerate {
                tabs.did_end_decelerating();
            }

            let indicator = tabs.bar().indicator().unwrap();
            let content_width = tabs.bar().layout().content_width();
            prop_assert!(indicator.min_x() >= -1e-9);
            prop_assert!(indicator.max_x() <= content_width + 1e-9);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Taps
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn taps_select_pages(count in 1usize..10, taps in prop::collection::vec(0usize..12, 1..8)) {
        let mut tabs = tab_pager(count);
        for tap in taps {
            let before = tabs.pager().cur_index();
            tabs.select_item(tap);
            if tap < count {
                prop_assert_eq!(tabs.pager().cur_index(), Some(tap));
                prop_assert_eq!(tabs.bar().cur_index(), tap);
            } else {
                prop_assert_eq!(tabs.pager().cur_index(), before);
            }
        }
    }
}
