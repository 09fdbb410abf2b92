pub mod formula_store;

pub use formula_store::FormulaStore;
