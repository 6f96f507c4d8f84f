//! Ingredient ledger.
//!
//! The single source of truth for per-ingredient stock counts, implemented as
//! deterministic in-memory logic (no IO, no persistence).

pub mod ingredient;
pub mod ledger;

pub use ingredient::Ingredient;
pub use ledger::{IngredientRecord, Ledger, StockLevel, StockSnapshot};
