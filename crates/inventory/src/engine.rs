//! One-day update engine over mixed record collections.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shelflife_core::{DomainError, DomainResult};

use crate::category::ItemState;
use crate::item::{CategorizedItem, Record};
use crate::legacy;

/// How the engine dispatches records to rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineMode {
    /// Every record must be categorized; dispatch by declared category.
    Strict,
    /// Plain records by name string, categorized ones by category; never fails.
    #[default]
    Legacy,
}

impl FromStr for EngineMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(EngineMode::Strict),
            "legacy" => Ok(EngineMode::Legacy),
            other => Err(DomainError::validation(format!("unknown engine mode: {other}"))),
        }
    }
}

/// Stateless engine; the mode is the only thing it carries between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateEngine {
    mode: EngineMode,
}

impl UpdateEngine {
    pub fn new(mode: EngineMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(EngineMode::Strict)
    }

    pub fn legacy() -> Self {
        Self::new(EngineMode::Legacy)
    }

    pub fn mode(&self) -> EngineMode {
        self.mode
    }

    /// Age every record by one day, in place.
    ///
    /// In strict mode all records are checked before any is mutated, so an
    /// error leaves the collection untouched.
    pub fn advance_one_day(&self, records: &mut [Record]) -> DomainResult<()> {
        if self.mode == EngineMode::Strict {
            ensure_all_categorized(records)?;
        }

        let mut changed = 0usize;
        for record in records.iter_mut() {
            let before = record.state();
            let after = match (self.mode, &*record) {
                (_, Record::Categorized(item)) => item.category().age(before),
                // Rejected by `ensure_all_categorized` above.
                (EngineMode::Strict, Record::Plain(_)) => before,
                (EngineMode::Legacy, Record::Plain(item)) => {
                    legacy::age_by_name(&item.name, before)
                }
            };
            if after != before {
                changed += 1;
                trace_change(record.name(), before, after);
                record.set_state(after);
            }
        }

        tracing::debug!(
            mode = ?self.mode,
            records = records.len(),
            changed,
            "advanced stock by one day"
        );
        Ok(())
    }
}

/// Age categorized records by one day, in place.
///
/// The slice type already guarantees a recognized kind, so this cannot fail.
pub fn advance_one_day(items: &mut [CategorizedItem]) {
    for item in items.iter_mut() {
        let before = item.state();
        item.advance();
        let after = item.state();
        if after != before {
            trace_change(item.name(), before, after);
        }
    }
}

fn ensure_all_categorized(records: &[Record]) -> DomainResult<()> {
    if let Some((index, record)) = records
        .iter()
        .enumerate()
        .find(|(_, r)| !matches!(r, Record::Categorized(_)))
    {
        tracing::warn!(
            index,
            kind = record.kind(),
            name = record.name(),
            "strict mode rejected record"
        );
        return Err(DomainError::type_mismatch(format!(
            "record {index} ({:?}) is a {} item; strict mode requires categorized items",
            record.name(),
            record.kind()
        )));
    }
    Ok(())
}

fn trace_change(name: &str, before: ItemState, after: ItemState) {
    tracing::debug!(
        item = name,
        sell_in_before = before.sell_in,
        sell_in_after = after.sell_in,
        quality_before = before.quality,
        quality_after = after.quality,
        "item aged"
    );
}
