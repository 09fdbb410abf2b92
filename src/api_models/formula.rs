use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct CreateFormulaRequest {
    pub code: Option<String>,
    pub preset: Option<String>,
}

/// 前端输入框的原始值，数字或文本均可
#[derive(Debug, Deserialize)]
pub struct RawValueRequest {
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Deserialize)]
pub struct AddIngredientRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub percent: Value,
}

#[derive(Debug, Serialize)]
pub struct IngredientResponse {
    pub name: String,
    pub percent: f64,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct FormulaResponse {
    pub id: Option<Uuid>,
    pub name: String,
    pub base_weight: f64,
    pub ingredients: Vec<IngredientResponse>,
    pub total_percent: f64,
    pub total_weight: f64,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ShareCodeResponse {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct PresetListResponse {
    pub presets: Vec<&'static str>,
}
