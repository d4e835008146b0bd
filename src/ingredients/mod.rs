//! Ingredient lines: quantity extraction, serving scaling and shopping aisles.

mod aisle;
mod quantity;
mod scale;

pub use self::aisle::Aisle;
pub use self::quantity::{parse_ingredient, parse_ingredient_name, parse_ingredient_quantity};
pub use self::scale::{format_amount, scale_quantity, BASE_SERVINGS};
