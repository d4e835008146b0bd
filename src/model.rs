use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::StepsError;

/// Recipe as delivered by the recipe generator.
///
/// Instructions may carry a `⟦label:...⟧` prefix; ingredient lines are free
/// text such as "200 g Mehl".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub nutrition: Nutrition,
}

/// Nutrition values per serving.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: Option<u32>,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
}

impl Recipe {
    pub fn from_json(json: &str) -> Result<Self, StepsError> {
        let recipe: Recipe = serde_json::from_str(json)?;
        if recipe.title.trim().is_empty() {
            return Err(StepsError::InvalidInput(
                "Recipe title cannot be empty".to_string(),
            ));
        }
        Ok(recipe)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StepsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
