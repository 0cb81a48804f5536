use serde::{Deserialize, Serialize};

use shelflife_core::{lower_quality, raise_quality};

/// Legacy name of the aging cheese.
pub const AGED_BRIE: &str = "Aged Brie";
/// Legacy name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
/// Legacy name of the concert ticket.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Closed set of item categories, each with its own one-day transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Ordinary degrading item.
    #[default]
    Generic,
    /// Gains quality as it ages.
    Aging,
    /// Never sold, never degrades.
    Legendary,
    /// Gains quality faster as the event approaches, worthless afterwards.
    EventTicket,
    /// Degrades twice as fast as a generic item.
    Conjured,
    /// Never changes; distinct from `Legendary` only by origin.
    Durable,
}

/// The two mutable attributes of a record, as one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemState {
    pub sell_in: i32,
    pub quality: i32,
}

impl ItemState {
    pub fn new(sell_in: i32, quality: i32) -> Self {
        Self { sell_in, quality }
    }

    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl Category {
    /// Map a legacy item name onto its category.
    ///
    /// Only the three special names are recognized; anything else is `Generic`.
    /// Conjured and durable items have no legacy name.
    pub fn from_legacy_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::Aging,
            SULFURAS => Category::Legendary,
            BACKSTAGE_PASSES => Category::EventTicket,
            _ => Category::Generic,
        }
    }

    /// Frozen categories never change sell-in or quality.
    pub fn is_frozen(self) -> bool {
        matches!(self, Category::Legendary | Category::Durable)
    }

    /// Bounded categories keep quality within `[0, 50]`.
    pub fn is_bounded(self) -> bool {
        !self.is_frozen()
    }

    /// Compute the state one day later.
    pub fn age(self, state: ItemState) -> ItemState {
        match self {
            Category::Generic => age_degrading(state, 1),
            Category::Conjured => age_degrading(state, 2),
            Category::Aging => age_aging(state),
            Category::EventTicket => age_event_ticket(state),
            Category::Legendary | Category::Durable => state,
        }
    }
}

/// Degrading items lose `rate` before the sell date and `2 * rate` after it.
fn age_degrading(state: ItemState, rate: u32) -> ItemState {
    let mut next = ItemState::new(
        state.sell_in.saturating_sub(1),
        lower_quality(state.quality, rate),
    );
    if next.is_expired() {
        next.quality = lower_quality(next.quality, rate);
    }
    next
}

fn age_aging(state: ItemState) -> ItemState {
    let mut next = ItemState::new(
        state.sell_in.saturating_sub(1),
        raise_quality(state.quality, 1),
    );
    if next.is_expired() {
        next.quality = raise_quality(next.quality, 1);
    }
    next
}

/// Increments are chosen from the sell-in *before* today's decrement.
fn age_event_ticket(state: ItemState) -> ItemState {
    let steps = match state.sell_in {
        s if s < 6 => 3,
        s if s < 11 => 2,
        _ => 1,
    };
    let next = ItemState::new(
        state.sell_in.saturating_sub(1),
        raise_quality(state.quality, steps),
    );
    if next.is_expired() {
        ItemState { quality: 0, ..next }
    } else {
        next
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Category::Generic => "generic",
            Category::Aging => "aging",
            Category::Legendary => "legendary",
            Category::EventTicket => "event_ticket",
            Category::Conjured => "conjured",
            Category::Durable => "durable",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelflife_core::{QUALITY_MAX, QUALITY_MIN};

    fn age(category: Category, sell_in: i32, quality: i32) -> (i32, i32) {
        let next = category.age(ItemState::new(sell_in, quality));
        (next.sell_in, next.quality)
    }

    #[test]
    fn legacy_names_map_to_categories() {
        assert_eq!(Category::from_legacy_name(AGED_BRIE), Category::Aging);
        assert_eq!(Category::from_legacy_name(SULFURAS), Category::Legendary);
        assert_eq!(Category::from_legacy_name(BACKSTAGE_PASSES), Category::EventTicket);
        assert_eq!(Category::from_legacy_name("foo"), Category::Generic);
        // Exact match only.
        assert_eq!(Category::from_legacy_name("aged brie"), Category::Generic);
        assert_eq!(Category::from_legacy_name("Conjured Mana Cake"), Category::Generic);
    }

    #[test]
    fn generic_degrades_once_before_and_twice_after_sell_date() {
        assert_eq!(age(Category::Generic, 1, 1), (0, 0));
        assert_eq!(age(Category::Generic, 10, 20), (9, 19));
        assert_eq!(age(Category::Generic, 0, 4), (-1, 2));
        assert_eq!(age(Category::Generic, -3, 4), (-4, 2));
    }

    #[test]
    fn generic_quality_floors_at_zero() {
        assert_eq!(age(Category::Generic, 0, 0), (-1, 0));
        assert_eq!(age(Category::Generic, 0, 1), (-1, 0));
    }

    #[test]
    fn conjured_degrades_twice_as_fast() {
        assert_eq!(age(Category::Conjured, 3, 4), (2, 2));
        assert_eq!(age(Category::Conjured, 0, 10), (-1, 6));
        assert_eq!(age(Category::Conjured, 0, 3), (-1, 0));
    }

    #[test]
    fn aging_gains_quality_up_to_cap() {
        assert_eq!(age(Category::Aging, 1, 10), (0, 11));
        assert_eq!(age(Category::Aging, 5, QUALITY_MAX), (4, QUALITY_MAX));
        // Past the sell date the post-expiry step adds one more.
        assert_eq!(age(Category::Aging, 0, 10), (-1, 12));
        assert_eq!(age(Category::Aging, 0, 49), (-1, QUALITY_MAX));
    }

    #[test]
    fn event_ticket_increments_by_distance_to_event() {
        assert_eq!(age(Category::EventTicket, 15, 20), (14, 21));
        assert_eq!(age(Category::EventTicket, 11, 20), (10, 21));
        assert_eq!(age(Category::EventTicket, 10, 10), (9, 12));
        assert_eq!(age(Category::EventTicket, 6, 10), (5, 12));
        assert_eq!(age(Category::EventTicket, 5, 10), (4, 13));
        assert_eq!(age(Category::EventTicket, 4, 10), (3, 13));
        assert_eq!(age(Category::EventTicket, 1, 10), (0, 13));
    }

    #[test]
    fn event_ticket_increments_respect_cap() {
        assert_eq!(age(Category::EventTicket, 5, 49), (4, QUALITY_MAX));
        assert_eq!(age(Category::EventTicket, 10, 49), (9, QUALITY_MAX));
    }

    #[test]
    fn event_ticket_is_worthless_after_event() {
        assert_eq!(age(Category::EventTicket, 0, 10), (-1, QUALITY_MIN));
        assert_eq!(age(Category::EventTicket, -4, 0), (-5, QUALITY_MIN));
    }

    #[test]
    fn sell_in_saturates_at_lower_bound() {
        assert_eq!(age(Category::Generic, i32::MIN, 10), (i32::MIN, 8));
        assert_eq!(age(Category::Conjured, i32::MIN, 10), (i32::MIN, 6));
        assert_eq!(age(Category::Aging, i32::MIN, 10), (i32::MIN, 12));
        // Still expired, so the ticket stays worthless.
        assert_eq!(age(Category::EventTicket, i32::MIN, 10), (i32::MIN, QUALITY_MIN));
    }

    #[test]
    fn frozen_categories_never_change() {
        assert_eq!(age(Category::Legendary, 10, 80), (10, 80));
        assert_eq!(age(Category::Legendary, -1, 80), (-1, 80));
        assert_eq!(age(Category::Durable, 0, 35), (0, 35));
        assert!(Category::Legendary.is_frozen());
        assert!(Category::Durable.is_frozen());
        assert!(Category::Conjured.is_bounded());
    }

    #[test]
    fn serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&Category::EventTicket).unwrap();
        assert_eq!(json, "\"event_ticket\"");
        let parsed: Category = serde_json::from_str("\"conjured\"").unwrap();
        assert_eq!(parsed, Category::Conjured);
        assert!(serde_json::from_str::<Category>("\"perishable\"").is_err());
    }

    #[test]
    fn display_matches_serde_tag() {
        for category in [
            Category::Generic,
            Category::Aging,
            Category::Legendary,
            Category::EventTicket,
            Category::Conjured,
            Category::Durable,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }
}
