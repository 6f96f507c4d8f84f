use serde::{Deserialize, Serialize};

use juicebar_inventory::{Ingredient, Ledger, StockSnapshot};

use crate::config::EngineConfig;
use crate::recipe::Recipe;

/// Outcome of a fulfillment request.
///
/// Running out of an ingredient is an expected result, not an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fulfillment {
    Success,
    Failure,
}

impl Fulfillment {
    pub fn is_success(self) -> bool {
        matches!(self, Fulfillment::Success)
    }
}

/// Recipe engine: fulfills recipes against an exclusively owned [`Ledger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeEngine {
    ledger: Ledger,
}

impl Default for RecipeEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl RecipeEngine {
    /// Build an engine whose ledger tracks every ingredient at `config.initial_stock`.
    pub fn new(config: EngineConfig) -> Self {
        tracing::info!(initial_stock = config.initial_stock, "recipe engine initialized");
        Self {
            ledger: Ledger::with_stock(config.initial_stock),
        }
    }

    /// Check phase only: true iff every requirement of `recipe` is in stock.
    pub fn can_fulfill(&self, recipe: Recipe) -> bool {
        recipe
            .requirements()
            .iter()
            .all(|req| self.ledger.is_sufficient(req.ingredient, req.amount))
    }

    /// Consume the ingredients for `recipe`, all or nothing.
    ///
    /// If any requirement is short the ledger is left untouched and
    /// [`Fulfillment::Failure`] is returned. Debits only start once every
    /// requirement has passed, so no rollback path exists.
    pub fn fulfill(&mut self, recipe: Recipe) -> Fulfillment {
        if !self.can_fulfill(recipe) {
            tracing::debug!(%recipe, outcome = "failure", "insufficient stock");
            return Fulfillment::Failure;
        }

        for req in recipe.requirements() {
            self.ledger.debit(req.ingredient, req.amount);
        }

        tracing::debug!(%recipe, outcome = "success", "recipe fulfilled");
        Fulfillment::Success
    }

    /// Replenish `ingredient` by `amount`.
    pub fn restock(&mut self, ingredient: Ingredient, amount: u32) {
        self.ledger.credit(ingredient, amount);
        tracing::debug!(%ingredient, amount, stock = self.ledger.stock_of(ingredient), "restocked");
    }

    pub fn stock_of(&self, ingredient: Ingredient) -> u32 {
        self.ledger.stock_of(ingredient)
    }

    pub fn snapshot(&self) -> StockSnapshot {
        self.ledger.snapshot()
    }
}
