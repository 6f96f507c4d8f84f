//! Command-line kiosk: presents the menu and places orders against a
//! [`RecipeEngine`], printing one JSON line per result.

use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use juicebar_inventory::StockSnapshot;
use juicebar_recipes::{Fulfillment, Recipe, RecipeEngine, Requirement};

/// One menu line.
#[derive(Debug, Serialize)]
pub struct MenuEntry {
    pub recipe: Recipe,
    pub requirements: &'static [Requirement],
}

/// Result of one order, as printed.
#[derive(Debug, Serialize)]
pub struct OrderReport {
    pub recipe: Recipe,
    pub outcome: Fulfillment,
    pub stock: StockSnapshot,
}

pub fn menu() -> Vec<MenuEntry> {
    Recipe::ALL
        .into_iter()
        .map(|recipe| MenuEntry {
            recipe,
            requirements: recipe.requirements(),
        })
        .collect()
}

/// Print the menu when `args` is empty, otherwise fulfill each named recipe in order.
///
/// All names are parsed before any order is placed, so a typo fails the run
/// without consuming stock.
pub fn run<W: Write>(
    engine: &mut RecipeEngine,
    args: &[String],
    out: &mut W,
) -> anyhow::Result<()> {
    if args.is_empty() {
        for entry in menu() {
            write_json_line(out, &entry)?;
        }
        return Ok(());
    }

    let recipes = args
        .iter()
        .map(|name| name.parse::<Recipe>().with_context(|| format!("unknown recipe {name:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for recipe in recipes {
        let outcome = engine.fulfill(recipe);
        if !outcome.is_success() {
            tracing::info!(%recipe, "order rejected: not enough stock");
        }
        let report = OrderReport {
            recipe,
            outcome,
            stock: engine.snapshot(),
        };
        write_json_line(out, &report)?;
    }

    Ok(())
}

fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value).context("failed to encode output")?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn lines(buf: &[u8]) -> Vec<Value> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn no_args_prints_menu() {
        let mut engine = RecipeEngine::default();
        let mut buf = Vec::new();
        run(&mut engine, &[], &mut buf).unwrap();

        let out = lines(&buf);
        assert_eq!(out.len(), Recipe::ALL.len());
        assert_eq!(
            out[5],
            json!({
                "recipe": "strawberry-banana",
                "requirements": [
                    { "ingredient": "strawberry", "amount": 10 },
                    { "ingredient": "banana", "amount": 1 }
                ]
            })
        );
    }

    #[test]
    fn orders_report_outcome_and_stock() {
        let mut engine = RecipeEngine::default();
        let args = vec!["banana".to_string(), "strawberry".to_string()];
        let mut buf = Vec::new();
        run(&mut engine, &args, &mut buf).unwrap();

        let out = lines(&buf);
        assert_eq!(out[0]["outcome"], "success");
        assert_eq!(out[0]["stock"][1], json!({ "ingredient": "banana", "stock": 8 }));
        assert_eq!(out[1]["outcome"], "failure");
        assert_eq!(out[1]["stock"][0], json!({ "ingredient": "strawberry", "stock": 10 }));
    }

    #[test]
    fn unknown_recipe_places_no_orders() {
        let mut engine = RecipeEngine::default();
        let args = vec!["banana".to_string(), "durian".to_string()];
        let mut buf = Vec::new();

        let err = run(&mut engine, &args, &mut buf).unwrap_err();
        assert!(err.to_string().contains("durian"));
        assert!(buf.is_empty());
        assert_eq!(engine.snapshot(), RecipeEngine::default().snapshot());
    }
}
