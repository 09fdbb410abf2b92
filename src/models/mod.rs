pub mod formula;

pub use formula::{FormulaModel, Ingredient, DEFAULT_BASE_WEIGHT};
