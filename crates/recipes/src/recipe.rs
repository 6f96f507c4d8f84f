use core::str::FromStr;
use serde::{Deserialize, Serialize};

use juicebar_core::{DomainError, ValueObject};
use juicebar_inventory::Ingredient;

/// One ingredient amount a recipe consumes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirement {
    pub ingredient: Ingredient,
    pub amount: u32,
}

impl Requirement {
    pub const fn new(ingredient: Ingredient, amount: u32) -> Self {
        Self { ingredient, amount }
    }
}

impl ValueObject for Requirement {}

/// Closed set of recipes on the menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recipe {
    Strawberry,
    Banana,
    Kiwi,
    Pineapple,
    Mango,
    StrawberryBanana,
    MangoKiwi,
}

const STRAWBERRY: &[Requirement] = &[Requirement::new(Ingredient::Strawberry, 16)];
const BANANA: &[Requirement] = &[Requirement::new(Ingredient::Banana, 2)];
const KIWI: &[Requirement] = &[Requirement::new(Ingredient::Kiwi, 3)];
const PINEAPPLE: &[Requirement] = &[Requirement::new(Ingredient::Pineapple, 2)];
const MANGO: &[Requirement] = &[Requirement::new(Ingredient::Mango, 3)];
const STRAWBERRY_BANANA: &[Requirement] = &[
    Requirement::new(Ingredient::Strawberry, 10),
    Requirement::new(Ingredient::Banana, 1),
];
const MANGO_KIWI: &[Requirement] = &[
    Requirement::new(Ingredient::Mango, 2),
    Requirement::new(Ingredient::Kiwi, 1),
];

impl Recipe {
    /// Every recipe, in menu order.
    pub const ALL: [Recipe; 7] = [
        Recipe::Strawberry,
        Recipe::Banana,
        Recipe::Kiwi,
        Recipe::Pineapple,
        Recipe::Mango,
        Recipe::StrawberryBanana,
        Recipe::MangoKiwi,
    ];

    /// Static ingredient requirements, one entry per distinct ingredient.
    pub fn requirements(self) -> &'static [Requirement] {
        match self {
            Recipe::Strawberry => STRAWBERRY,
            Recipe::Banana => BANANA,
            Recipe::Kiwi => KIWI,
            Recipe::Pineapple => PINEAPPLE,
            Recipe::Mango => MANGO,
            Recipe::StrawberryBanana => STRAWBERRY_BANANA,
            Recipe::MangoKiwi => MANGO_KIWI,
        }
    }

    pub fn is_composite(self) -> bool {
        self.requirements().len() > 1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Recipe::Strawberry => "strawberry",
            Recipe::Banana => "banana",
            Recipe::Kiwi => "kiwi",
            Recipe::Pineapple => "pineapple",
            Recipe::Mango => "mango",
            Recipe::StrawberryBanana => "strawberry-banana",
            Recipe::MangoKiwi => "mango-kiwi",
        }
    }
}

impl core::fmt::Display for Recipe {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recipe {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Recipe::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::invalid_id(format!("Recipe: {name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn single_and_composite_partition() {
        let composite: Vec<_> = Recipe::ALL.into_iter().filter(|r| r.is_composite()).collect();
        assert_eq!(composite, vec![Recipe::StrawberryBanana, Recipe::MangoKiwi]);

        for recipe in Recipe::ALL.into_iter().filter(|r| !r.is_composite()) {
            assert_eq!(recipe.requirements().len(), 1);
        }
    }

    #[test]
    fn table_lists_each_ingredient_once() {
        for recipe in Recipe::ALL {
            let distinct: HashSet<_> = recipe.requirements().iter().map(|r| r.ingredient).collect();
            assert_eq!(distinct.len(), recipe.requirements().len(), "{recipe}");
            assert!(recipe.requirements().iter().all(|r| r.amount > 0), "{recipe}");
        }
    }

    #[test]
    fn composite_amounts_match_menu() {
        assert_eq!(
            Recipe::StrawberryBanana.requirements(),
            &[
                Requirement::new(Ingredient::Strawberry, 10),
                Requirement::new(Ingredient::Banana, 1),
            ]
        );
        assert_eq!(
            Recipe::MangoKiwi.requirements(),
            &[
                Requirement::new(Ingredient::Mango, 2),
                Requirement::new(Ingredient::Kiwi, 1),
            ]
        );
    }

    #[test]
    fn names_parse_and_serialize_consistently() {
        for recipe in Recipe::ALL {
            assert_eq!(recipe.as_str().parse::<Recipe>().unwrap(), recipe);
            let json = serde_json::to_string(&recipe).unwrap();
            assert_eq!(json, format!("\"{recipe}\""));
        }
    }

    #[test]
    fn requirements_compare_by_value() {
        fn same<T: ValueObject>(a: T, b: T) -> bool {
            a == b
        }

        assert!(same(
            Recipe::Banana.requirements()[0],
            Requirement::new(Ingredient::Banana, 2)
        ));
    }

    #[test]
    fn unknown_recipe_is_invalid_id() {
        let err = "durian".parse::<Recipe>().unwrap_err();
        assert_eq!(err, DomainError::InvalidId("Recipe: durian".to_string()));
    }
}
