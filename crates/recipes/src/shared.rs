//! Thread-safe handle to a [`RecipeEngine`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use juicebar_inventory::{Ingredient, StockSnapshot};

use crate::config::EngineConfig;
use crate::engine::{Fulfillment, RecipeEngine};
use crate::recipe::Recipe;

/// Cloneable handle serializing all access to one engine.
///
/// `fulfill` holds the lock across the whole check-and-debit sequence, so
/// concurrent orders can never both pass the check for the same stock.
#[derive(Debug, Clone, Default)]
pub struct SharedRecipeEngine {
    inner: Arc<Mutex<RecipeEngine>>,
}

impl SharedRecipeEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::from_engine(RecipeEngine::new(config))
    }

    pub fn from_engine(engine: RecipeEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // Poison is ignored: a recipe's debits only start after all of its checks pass.
    fn lock(&self) -> MutexGuard<'_, RecipeEngine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn fulfill(&self, recipe: Recipe) -> Fulfillment {
        self.lock().fulfill(recipe)
    }

    pub fn can_fulfill(&self, recipe: Recipe) -> bool {
        self.lock().can_fulfill(recipe)
    }

    pub fn restock(&self, ingredient: Ingredient, amount: u32) {
        self.lock().restock(ingredient, amount);
    }

    pub fn stock_of(&self, ingredient: Ingredient) -> u32 {
        self.lock().stock_of(ingredient)
    }

    pub fn snapshot(&self) -> StockSnapshot {
        self.lock().snapshot()
    }
}
