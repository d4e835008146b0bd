//! Per-recipe composition of the step and ingredient parsers.

use log::debug;
use serde::Serialize;

use crate::config::Settings;
use crate::ingredients::{self, Aisle};
use crate::model::Recipe;
use crate::steps::{self, LabelStrings};

/// What a single step offers to the cook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepAnalysis {
    /// 1-based position in the recipe
    pub index: usize,
    /// Instruction text without the label tag
    pub body: String,
    /// Timer label, explicit or derived
    pub label: String,
    /// Whether the label came from a `⟦label:...⟧` tag
    pub explicit_label: bool,
    pub duration_minutes: Option<u32>,
    /// Long wait before a later step: the cook can prepare the next one meanwhile
    pub suggest_parallel_work: bool,
}

/// Analyze one instruction. `index` is 1-based, `total` is the number of steps.
pub fn analyze_step(
    raw: &str,
    index: usize,
    total: usize,
    strings: &LabelStrings,
    hint_threshold_minutes: u32,
) -> StepAnalysis {
    let (explicit, body) = steps::split_instruction(raw);
    let duration_minutes = steps::extract_duration_minutes(&body);
    let label = steps::classify_label_with(&body, index, explicit.as_deref(), strings);
    let explicit_label = explicit.is_some_and(|l| !l.trim().is_empty());

    let is_last = index >= total;
    let suggest_parallel_work =
        !is_last && duration_minutes.is_some_and(|m| m >= hint_threshold_minutes);

    StepAnalysis {
        index,
        body,
        label,
        explicit_label,
        duration_minutes,
        suggest_parallel_work,
    }
}

/// Analyze every instruction of a recipe in order.
pub fn analyze_recipe(recipe: &Recipe, settings: &Settings) -> Vec<StepAnalysis> {
    let total = recipe.instructions.len();
    recipe
        .instructions
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            analyze_step(
                raw,
                i + 1,
                total,
                &settings.labels,
                settings.timers.hint_threshold_minutes,
            )
        })
        .collect()
}

/// One line of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingItem {
    pub name: String,
    pub quantity: Option<String>,
    pub aisle: Aisle,
}

/// Turn ingredient lines into shopping items scaled to `servings`.
///
/// `servings` below one is treated as one.
pub fn shopping_list(ingredients: &[String], servings: u32) -> Vec<ShoppingItem> {
    let servings = servings.max(1);
    let items: Vec<ShoppingItem> = ingredients
        .iter()
        .map(|line| {
            let (name, quantity) = ingredients::parse_ingredient(line);
            ShoppingItem {
                name,
                quantity: quantity.map(|q| ingredients::scale_quantity(&q, servings)),
                aisle: Aisle::categorize(line),
            }
        })
        .collect();
    debug!("Built {} shopping items for {} servings", items.len(), servings);
    items
}

/// Markdown rendering of a recipe for sharing.
pub fn to_markdown(recipe: &Recipe) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", recipe.title));

    if let Some(cooking_time) = &recipe.cooking_time {
        md.push_str(&format!("**Cooking time:** {}\n\n", cooking_time));
    }
    if let Some(difficulty) = &recipe.difficulty {
        md.push_str(&format!("**Difficulty:** {}\n\n", difficulty));
    }
    if !recipe.tags.is_empty() {
        md.push_str(&format!("**Tags:** {}\n\n", recipe.tags.join(", ")));
    }

    md.push_str("## Ingredients\n\n");
    for ingredient in &recipe.ingredients {
        md.push_str(&format!("- {}\n", ingredient));
    }
    md.push('\n');

    md.push_str("## Instructions\n\n");
    for (i, instruction) in recipe.instructions.iter().enumerate() {
        let (_, body) = steps::split_instruction(instruction);
        md.push_str(&format!("**Step {}**\n\n{}\n\n", i + 1, body));
    }

    let n = &recipe.nutrition;
    let nutrition: Vec<String> = [
        n.calories.map(|v| format!("- **Calories:** {} kcal", v)),
        n.protein_g.map(|v| format!("- **Protein:** {:.1}g", v)),
        n.carbs_g.map(|v| format!("- **Carbohydrates:** {:.1}g", v)),
        n.fat_g.map(|v| format!("- **Fat:** {:.1}g", v)),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !nutrition.is_empty() {
        md.push_str("## Nutrition (per serving)\n\n");
        md.push_str(&nutrition.join("\n"));
        md.push_str("\n\n");
    }

    md.push_str("---\n");
    md
}
