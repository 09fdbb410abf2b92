pub mod formula;

#[allow(unused_imports)]
pub use formula::{
    AddIngredientRequest, CreateFormulaRequest, FormulaResponse, IngredientResponse,
    PresetListResponse, RawValueRequest, ShareCodeResponse,
};
