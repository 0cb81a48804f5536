use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shelflife_core::{DomainError, DomainResult, QUALITY_MAX, QUALITY_MIN};

use crate::category::{Category, ItemState};

/// Plain record: behaviour is selected by the exact `name` string.
///
/// Construction never fails; negative quality is accepted and left alone by
/// the legacy rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Record policy applied by [`ConstructionPolicy::make_item`].
///
/// The default category set assumes `Validating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructionPolicy {
    /// Accept any values as given, including negative quality.
    Permissive,
    /// Reject negative quality; cap bounded categories at the maximum.
    #[default]
    Validating,
}

impl ConstructionPolicy {
    /// Build a categorized record under this policy.
    pub fn make_item(
        self,
        name: impl Into<String>,
        category: Category,
        sell_in: i32,
        quality: i32,
    ) -> DomainResult<CategorizedItem> {
        let name = name.into();
        let quality = match self {
            ConstructionPolicy::Permissive => quality,
            ConstructionPolicy::Validating => {
                if quality < QUALITY_MIN {
                    return Err(DomainError::construction(format!(
                        "quality cannot be negative (item: {name:?}, quality: {quality})"
                    )));
                }
                if category.is_bounded() {
                    quality.min(QUALITY_MAX)
                } else {
                    quality
                }
            }
        };

        Ok(CategorizedItem {
            name,
            category,
            sell_in,
            quality,
        })
    }
}

impl FromStr for ConstructionPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(ConstructionPolicy::Permissive),
            "validating" => Ok(ConstructionPolicy::Validating),
            other => Err(DomainError::validation(format!(
                "unknown construction policy: {other}"
            ))),
        }
    }
}

/// Categorized record: behaviour is selected by its declared [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategorizedItem {
    name: String,
    category: Category,
    sell_in: i32,
    quality: i32,
}

impl CategorizedItem {
    /// Adapt a plain record, deriving the category from its legacy name.
    pub fn from_legacy(item: Item, policy: ConstructionPolicy) -> DomainResult<Self> {
        let category = Category::from_legacy_name(&item.name);
        policy.make_item(item.name, category, item.sell_in, item.quality)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn state(&self) -> ItemState {
        ItemState::new(self.sell_in, self.quality)
    }

    /// Age this record by one day according to its category.
    pub fn advance(&mut self) {
        let next = self.category.age(self.state());
        self.sell_in = next.sell_in;
        self.quality = next.quality;
    }
}

impl From<CategorizedItem> for Item {
    fn from(value: CategorizedItem) -> Self {
        Item::new(value.name, value.sell_in, value.quality)
    }
}

impl core::fmt::Display for CategorizedItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Element of a mixed collection handed to the [`UpdateEngine`](crate::UpdateEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Plain(Item),
    Categorized(CategorizedItem),
}

impl Record {
    pub fn name(&self) -> &str {
        match self {
            Record::Plain(item) => &item.name,
            Record::Categorized(item) => item.name(),
        }
    }

    pub fn state(&self) -> ItemState {
        match self {
            Record::Plain(item) => ItemState::new(item.sell_in, item.quality),
            Record::Categorized(item) => item.state(),
        }
    }

    pub(crate) fn set_state(&mut self, state: ItemState) {
        match self {
            Record::Plain(item) => {
                item.sell_in = state.sell_in;
                item.quality = state.quality;
            }
            Record::Categorized(item) => {
                item.sell_in = state.sell_in;
                item.quality = state.quality;
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Record::Plain(_) => "plain",
            Record::Categorized(_) => "categorized",
        }
    }
}

impl From<Item> for Record {
    fn from(value: Item) -> Self {
        Record::Plain(value)
    }
}

impl From<CategorizedItem> for Record {
    fn from(value: CategorizedItem) -> Self {
        Record::Categorized(value)
    }
}

impl core::fmt::Display for Record {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Record::Plain(item) => core::fmt::Display::fmt(item, f),
            Record::Categorized(item) => core::fmt::Display::fmt(item, f),
        }
    }
}
