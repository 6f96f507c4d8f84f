//! Recipe engine.
//!
//! Holds the fixed recipe table and fulfills orders against an owned
//! [`Ledger`](juicebar_inventory::Ledger): every requirement is checked before
//! any stock is consumed, so a failed order never changes stock.

pub mod config;
pub mod engine;
pub mod recipe;
pub mod shared;

pub use config::{DEFAULT_INITIAL_STOCK, EngineConfig, INITIAL_STOCK_ENV};
pub use engine::{Fulfillment, RecipeEngine};
pub use recipe::{Recipe, Requirement};
pub use shared::SharedRecipeEngine;
