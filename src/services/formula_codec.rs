//! 配方的紧凑文本编码，可直接放进 URL 查询串
//!
//! ```text
//! n:Basic%20Bread!b:500!i:Water*63,Salt*2,Yeast*1
//! ```
//!
//! 字段之间用 `!` 分隔，字段名与值之间用 `:`，配料之间用 `,`，配料名与百分比之间用 `*`。
//! 名称做百分号编码，除 `A-Z a-z 0-9 - . _ ~` 之外的字节都会被转义，
//! 因此分隔符不会出现在名称内部。

use thiserror::Error;

use crate::models::FormulaModel;

const FIELD_SEP: char = '!';
const KEY_SEP: char = ':';
const INGREDIENT_SEP: char = ',';
const PERCENT_SEP: char = '*';

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("empty formula code")]
    Empty,
    #[error("malformed field: {0}")]
    MalformedField(String),
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("duplicate field: {0}")]
    DuplicateField(char),
    #[error("missing field: {0}")]
    MissingField(char),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("malformed ingredient: {0}")]
    MalformedIngredient(String),
    #[error("invalid escape in: {0}")]
    InvalidEscape(String),
}

pub fn encode(model: &FormulaModel) -> String {
    let mut fields = Vec::with_capacity(3);
    if !model.name().is_empty() {
        fields.push(format!("n{}{}", KEY_SEP, urlencoding::encode(model.name())));
    }
    fields.push(format!("b{}{}", KEY_SEP, model.base_weight()));

    let ingredients = model
        .ingredients()
        .iter()
        .map(|i| format!("{}{}{}", urlencoding::encode(i.name()), PERCENT_SEP, i.percent()))
        .collect::<Vec<_>>()
        .join(&INGREDIENT_SEP.to_string());
    fields.push(format!("i{}{}", KEY_SEP, ingredients));

    fields.join(&FIELD_SEP.to_string())
}

pub fn decode(text: &str) -> Result<FormulaModel, DecodeError> {
    let text = text.trim();
    let text = text.strip_prefix('?').unwrap_or(text);
    if text.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut name: Option<String> = None;
    let mut base: Option<f64> = None;
    let mut ingredients: Option<Vec<(String, f64)>> = None;

    for field in text.split(FIELD_SEP) {
        let (key, value) = field
            .split_once(KEY_SEP)
            .ok_or_else(|| DecodeError::MalformedField(field.to_string()))?;
        match key {
            "n" => {
                if name.is_some() {
                    return Err(DecodeError::DuplicateField('n'));
                }
                name = Some(decode_text(value)?);
            }
            "b" => {
                if base.is_some() {
                    return Err(DecodeError::DuplicateField('b'));
                }
                base = Some(decode_number(value)?);
            }
            "i" => {
                if ingredients.is_some() {
                    return Err(DecodeError::DuplicateField('i'));
                }
                ingredients = Some(decode_ingredients(value)?);
            }
            other => return Err(DecodeError::UnknownField(other.to_string())),
        }
    }

    let base = base.ok_or(DecodeError::MissingField('b'))?;
    let ingredients = ingredients.ok_or(DecodeError::MissingField('i'))?;
    Ok(FormulaModel::with_ingredients(
        name.unwrap_or_default(),
        base,
        ingredients,
    ))
}

fn decode_ingredients(value: &str) -> Result<Vec<(String, f64)>, DecodeError> {
    if value.is_empty() {
        return Ok(Vec::new());
    }
    value
        .split(INGREDIENT_SEP)
        .map(|token| {
            let (name, percent) = token
                .split_once(PERCENT_SEP)
                .ok_or_else(|| DecodeError::MalformedIngredient(token.to_string()))?;
            Ok((decode_text(name)?, decode_number(percent)?))
        })
        .collect()
}

fn decode_text(value: &str) -> Result<String, DecodeError> {
    // 只接受编码器会产生的字符，防止分隔符被原样夹带
    let unexpected = value
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~' | '%')));
    if unexpected {
        return Err(DecodeError::InvalidEscape(value.to_string()));
    }
    urlencoding::decode(value)
        .map(|s| s.into_owned())
        .map_err(|_| DecodeError::InvalidEscape(value.to_string()))
}

fn decode_number(value: &str) -> Result<f64, DecodeError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DecodeError::InvalidNumber(value.to_string()))
}
