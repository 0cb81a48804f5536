//! `shelflife-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model and the quality bounds every bounded item category shares.

pub mod bounds;
pub mod error;

pub use bounds::{QUALITY_MAX, QUALITY_MIN, lower_quality, raise_quality};
pub use error::{DomainError, DomainResult};
