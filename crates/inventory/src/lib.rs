//! Inventory shelf-aging module.
//!
//! This crate contains the business rules that age a stock of items by one day,
//! implemented purely as deterministic domain logic (no IO, no storage).
//!
//! Two record kinds exist side by side:
//! - [`Item`]: the plain record, whose behaviour is picked by its name string
//!   (the legacy rule-set in [`legacy`]).
//! - [`CategorizedItem`]: a record carrying an explicit [`Category`], built
//!   through a [`ConstructionPolicy`].
//!
//! [`UpdateEngine`] processes a mixed collection of [`Record`]s in either
//! [`EngineMode::Legacy`] or [`EngineMode::Strict`].

pub mod category;
pub mod engine;
pub mod item;
pub mod legacy;

pub use category::{Category, ItemState};
pub use engine::{EngineMode, UpdateEngine, advance_one_day};
pub use item::{CategorizedItem, ConstructionPolicy, Item, Record};
pub use legacy::update_quality;
