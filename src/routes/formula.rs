use axum::{routing::{delete, get, post, put}, Router};

use crate::app::AppState;
use crate::handler::formula::{
    add_ingredient, create_formula, delete_formula, get_formula, list_formulas, list_presets,
    preview_share, remove_ingredient, set_base_weight, set_ingredient_name,
    set_ingredient_percent, set_ingredient_weight, set_name, share_formula,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/presets", get(list_presets))
        .route("/share", get(preview_share))
        .route("/formulas", post(create_formula).get(list_formulas))
        .route("/formulas/:id", get(get_formula).delete(delete_formula))
        .route("/formulas/:id/share", get(share_formula))
        .route("/formulas/:id/name", put(set_name))
        .route("/formulas/:id/base-weight", put(set_base_weight))
        .route("/formulas/:id/ingredients", post(add_ingredient))
        .route("/formulas/:id/ingredients/:index", delete(remove_ingredient))
        .route("/formulas/:id/ingredients/:index/name", put(set_ingredient_name))
        .route("/formulas/:id/ingredients/:index/percent", put(set_ingredient_percent))
        .route("/formulas/:id/ingredients/:index/weight", put(set_ingredient_weight))
}
