use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::api_models::formula::{
    AddIngredientRequest, CreateFormulaRequest, FormulaResponse, IngredientResponse,
    PresetListResponse, RawValueRequest, ShareCodeResponse,
};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::models::FormulaModel;
use crate::services::{formula_service, presets};
use crate::utils::numeric::{raw_text, to_int};

fn to_response(id: Option<Uuid>, model: &FormulaModel) -> FormulaResponse {
    FormulaResponse {
        id,
        name: model.name().to_string(),
        base_weight: model.base_weight(),
        ingredients: model
            .ingredients()
            .iter()
            .map(|i| IngredientResponse {
                name: i.name().to_string(),
                percent: i.percent(),
                weight: i.weight(),
            })
            .collect(),
        total_percent: model.total_percent(),
        total_weight: model.total_weight(),
        code: formula_service::serialize(model),
    }
}

/// 在指定配方上执行修改，配方不存在返回 404
async fn mutate<F>(state: &AppState, id: Uuid, op: &str, f: F) -> Result<Json<FormulaResponse>, AppError>
where
    F: FnOnce(&mut FormulaModel) -> bool,
{
    let (applied, model) = state
        .store
        .update(id, f)
        .await
        .ok_or(AppError::FormulaNotFound(id))?;
    if !applied {
        tracing::debug!("{} ignored for formula {}", op, id);
    }
    Ok(Json(to_response(Some(id), &model)))
}

/// 列出可选的预设配方
pub async fn list_presets() -> Json<PresetListResponse> {
    Json(PresetListResponse {
        presets: presets::preset_names(),
    })
}

/// 解析分享链接：整个查询串即配方编码，解析失败返回默认配方
pub async fn preview_share(RawQuery(query): RawQuery) -> Json<FormulaResponse> {
    let model = formula_service::load_or_default(query.as_deref().unwrap_or_default());
    Json(to_response(None, &model))
}

/// 新建配方：优先使用编码，其次预设，最后默认配方
pub async fn create_formula(
    State(state): State<AppState>,
    payload: Option<Json<CreateFormulaRequest>>,
) -> Result<(StatusCode, Json<FormulaResponse>), AppError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let model = match (payload.code, payload.preset) {
        (Some(code), _) => formula_service::load_or_default(&code),
        (None, Some(key)) => presets::preset(&key)
            .ok_or_else(|| AppError::BadRequest(format!("unknown preset: {}", key)))?,
        (None, None) => formula_service::default_formula(),
    };

    let id = state.store.create(model.clone()).await;
    tracing::info!("Created formula {} ({} ingredients)", id, model.ingredients().len());
    Ok((StatusCode::CREATED, Json(to_response(Some(id), &model))))
}

pub async fn list_formulas(State(state): State<AppState>) -> Json<Vec<FormulaResponse>> {
    let items = state.store.list().await;
    Json(
        items
            .iter()
            .map(|(id, model)| to_response(Some(*id), model))
            .collect(),
    )
}

pub async fn get_formula(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FormulaResponse>, AppError> {
    let model = state.store.get(id).await.ok_or(AppError::FormulaNotFound(id))?;
    Ok(Json(to_response(Some(id), &model)))
}

pub async fn delete_formula(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete(id).await {
        return Err(AppError::FormulaNotFound(id));
    }
    tracing::info!("Deleted formula {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn share_formula(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShareCodeResponse>, AppError> {
    let model = state.store.get(id).await.ok_or(AppError::FormulaNotFound(id))?;
    Ok(Json(ShareCodeResponse {
        code: formula_service::serialize(&model),
    }))
}

pub async fn set_name(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RawValueRequest>,
) -> Result<Json<FormulaResponse>, AppError> {
    let name = raw_text(Some(&payload.value));
    mutate(&state, id, "set_name", |m| {
        m.set_formula_name(name);
        true
    })
    .await
}

pub async fn set_base_weight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RawValueRequest>,
) -> Result<Json<FormulaResponse>, AppError> {
    let raw = raw_text(Some(&payload.value));
    mutate(&state, id, "set_base_weight", |m| {
        m.set_base_weight(&raw);
        true
    })
    .await
}

pub async fn add_ingredient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddIngredientRequest>,
) -> Result<(StatusCode, Json<FormulaResponse>), AppError> {
    let raw = raw_text(Some(&payload.percent));
    let body = mutate(&state, id, "add_ingredient", |m| {
        m.add_ingredient(payload.name, &raw);
        true
    })
    .await?;
    Ok((StatusCode::CREATED, body))
}

pub async fn remove_ingredient(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, String)>,
) -> Result<Json<FormulaResponse>, AppError> {
    let index = to_int(&index);
    mutate(&state, id, "remove_ingredient", |m| m.remove_ingredient(index)).await
}

pub async fn set_ingredient_name(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, String)>,
    Json(payload): Json<RawValueRequest>,
) -> Result<Json<FormulaResponse>, AppError> {
    let index = to_int(&index);
    let name = raw_text(Some(&payload.value));
    mutate(&state, id, "set_ingredient_name", |m| m.set_ingredient_name(index, name)).await
}

pub async fn set_ingredient_percent(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, String)>,
    Json(payload): Json<RawValueRequest>,
) -> Result<Json<FormulaResponse>, AppError> {
    let index = to_int(&index);
    let raw = raw_text(Some(&payload.value));
    mutate(&state, id, "set_ingredient_percent", |m| {
        m.set_ingredient_percent(index, &raw)
    })
    .await
}

/// 编辑某个配料的重量，反推面粉重量
pub async fn set_ingredient_weight(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, String)>,
    Json(payload): Json<RawValueRequest>,
) -> Result<Json<FormulaResponse>, AppError> {
    let index = to_int(&index);
    let raw = raw_text(Some(&payload.value));
    mutate(&state, id, "back_solve_base", |m| {
        m.back_solve_base_from_ingredient_weight(index, &raw)
    })
    .await
}
