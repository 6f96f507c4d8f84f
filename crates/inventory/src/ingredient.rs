use core::str::FromStr;
use serde::{Deserialize, Serialize};

use juicebar_core::DomainError;

/// Closed set of ingredient kinds the ledger tracks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ingredient {
    Strawberry,
    Banana,
    Kiwi,
    Pineapple,
    Mango,
}

impl Ingredient {
    /// Every ingredient, in display order.
    pub const ALL: [Ingredient; 5] = [
        Ingredient::Strawberry,
        Ingredient::Banana,
        Ingredient::Kiwi,
        Ingredient::Pineapple,
        Ingredient::Mango,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Ingredient::Strawberry => "strawberry",
            Ingredient::Banana => "banana",
            Ingredient::Kiwi => "kiwi",
            Ingredient::Pineapple => "pineapple",
            Ingredient::Mango => "mango",
        }
    }
}

impl core::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ingredient {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Ingredient::ALL
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::invalid_id(format!("Ingredient: {name}")))
    }
}
