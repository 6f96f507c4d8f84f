use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use juicebar_core::Entity;

use crate::ingredient::Ingredient;

/// Stock record for one ingredient.
///
/// Only the owning [`Ledger`] mutates the count; callers see it by value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRecord {
    ingredient: Ingredient,
    stock: u32,
}

impl IngredientRecord {
    fn new(ingredient: Ingredient, stock: u32) -> Self {
        Self { ingredient, stock }
    }

    pub fn ingredient(&self) -> Ingredient {
        self.ingredient
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }
}

impl Entity for IngredientRecord {
    type Id = Ingredient;

    fn id(&self) -> &Self::Id {
        &self.ingredient
    }
}

/// One line of a [`StockSnapshot`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub ingredient: Ingredient,
    pub stock: u32,
}

/// Point-in-time copy of every known stock count, in `Ingredient::ALL` order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockSnapshot(Vec<StockLevel>);

impl StockSnapshot {
    pub fn levels(&self) -> &[StockLevel] {
        &self.0
    }

    /// Stock for `ingredient` at snapshot time (0 if it was not tracked).
    pub fn get(&self, ingredient: Ingredient) -> u32 {
        self.0
            .iter()
            .find(|level| level.ingredient == ingredient)
            .map_or(0, |level| level.stock)
    }
}

/// Ingredient ledger: authoritative stock per ingredient.
///
/// Single-threaded by itself; concurrent callers must serialize access to the
/// owner (see `SharedRecipeEngine` in `juicebar-recipes`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: HashMap<Ingredient, IngredientRecord>,
}

impl Ledger {
    /// Empty ledger with no tracked ingredients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger tracking every known ingredient at `initial_stock`.
    pub fn with_stock(initial_stock: u32) -> Self {
        let mut ledger = Self::new();
        for ingredient in Ingredient::ALL {
            ledger.initialize(ingredient, initial_stock);
        }
        ledger
    }

    /// Create (or replace) the record for `ingredient`.
    ///
    /// Re-initializing an ingredient overwrites its stock; it does not add to it.
    pub fn initialize(&mut self, ingredient: Ingredient, initial_stock: u32) {
        self.records
            .insert(ingredient, IngredientRecord::new(ingredient, initial_stock));
    }

    /// Add `amount` to the stock of `ingredient`. Unknown ingredients are ignored.
    pub fn credit(&mut self, ingredient: Ingredient, amount: u32) {
        if let Some(record) = self.records.get_mut(&ingredient) {
            record.stock = record.stock.saturating_add(amount);
        }
    }

    /// Subtract `amount` from the stock of `ingredient`. Unknown ingredients are ignored.
    ///
    /// This does not check sufficiency. Callers must confirm
    /// [`is_sufficient`](Self::is_sufficient) for the same amount first. A debit
    /// larger than the stock is clamped at zero and logged.
    pub fn debit(&mut self, ingredient: Ingredient, amount: u32) {
        if let Some(record) = self.records.get_mut(&ingredient) {
            if amount > record.stock {
                tracing::warn!(
                    %ingredient,
                    stock = record.stock,
                    amount,
                    "debit exceeds stock; clamping to zero"
                );
            }
            record.stock = record.stock.saturating_sub(amount);
        }
    }

    /// True iff `ingredient` is tracked and holds at least `amount`.
    pub fn is_sufficient(&self, ingredient: Ingredient, amount: u32) -> bool {
        self.records
            .get(&ingredient)
            .is_some_and(|record| record.stock >= amount)
    }

    /// Current stock of `ingredient`, or 0 if it is not tracked.
    pub fn stock_of(&self, ingredient: Ingredient) -> u32 {
        self.records.get(&ingredient).map_or(0, IngredientRecord::stock)
    }

    pub fn record(&self, ingredient: Ingredient) -> Option<&IngredientRecord> {
        self.records.get(&ingredient)
    }

    pub fn snapshot(&self) -> StockSnapshot {
        StockSnapshot(
            Ingredient::ALL
                .into_iter()
                .filter_map(|ingredient| self.records.get(&ingredient))
                .map(|record| StockLevel {
                    ingredient: record.ingredient,
                    stock: record.stock,
                })
                .collect(),
        )
    }
}
