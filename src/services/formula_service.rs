use crate::models::FormulaModel;
use crate::services::formula_codec;
use crate::services::presets::{self, DEFAULT_PRESET};

/// 默认配方，解码失败或输入为空时使用
pub fn default_formula() -> FormulaModel {
    presets::preset(DEFAULT_PRESET).unwrap_or_default()
}

/// 解码分享链接中的配方，任何错误都回退到默认配方，不会失败
pub fn load_or_default(raw: &str) -> FormulaModel {
    if raw.trim().is_empty() {
        return default_formula();
    }
    match formula_codec::decode(raw) {
        Ok(model) => model,
        Err(e) => {
            tracing::warn!("Failed to decode formula code, using default: {}", e);
            default_formula()
        }
    }
}

pub fn serialize(model: &FormulaModel) -> String {
    formula_codec::encode(model)
}
