//! Legacy name-matched rule-set.
//!
//! Behaviour is selected by exact name comparison and applied in three phases:
//! a quality change computed from today's sell-in, the sell-in decrement, and a
//! second quality change for items that are now past their sell date.
//!
//! This rule-set is the behavioural reference the categorized rules are checked
//! against. It never fails, whatever the input.

use shelflife_core::{lower_quality, raise_quality};

use crate::category::{AGED_BRIE, BACKSTAGE_PASSES, ItemState, SULFURAS};
use crate::item::Item;

/// Age every plain item by one day, in place.
pub fn update_quality(items: &mut [Item]) {
    for item in items.iter_mut() {
        let next = age_by_name(&item.name, ItemState::new(item.sell_in, item.quality));
        item.sell_in = next.sell_in;
        item.quality = next.quality;
    }
}

/// Compute the state one day later for an item identified only by `name`.
pub(crate) fn age_by_name(name: &str, state: ItemState) -> ItemState {
    let ItemState {
        mut sell_in,
        mut quality,
    } = state;

    // Phase 1: today's change, from the sell-in before decrement.
    match name {
        SULFURAS => {}
        AGED_BRIE => quality = raise_quality(quality, 1),
        BACKSTAGE_PASSES => {
            let mut steps = 1;
            if sell_in < 11 {
                steps += 1;
            }
            if sell_in < 6 {
                steps += 1;
            }
            quality = raise_quality(quality, steps);
        }
        _ => quality = lower_quality(quality, 1),
    }

    // Phase 2: sell-in.
    if name != SULFURAS {
        sell_in = sell_in.saturating_sub(1);
    }

    // Phase 3: past the sell date.
    if sell_in < 0 {
        match name {
            SULFURAS => {}
            AGED_BRIE => quality = raise_quality(quality, 1),
            BACKSTAGE_PASSES => quality = 0,
            _ => quality = lower_quality(quality, 1),
        }
    }

    ItemState { sell_in, quality }
}
