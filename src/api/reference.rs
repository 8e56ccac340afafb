use axum::{extract::State, routing::get, Json, Router};

use crate::api::AppState;
use crate::error::Result;
use crate::models::reference::Reference;

/// GET /get_states
async fn get_states(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(Reference::state_names(&state.pool).await?))
}

/// GET /get_expiration_months
async fn get_expiration_months(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(Reference::expiration_months(&state.pool).await?))
}

/// GET /get_expiration_years
async fn get_expiration_years(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(Reference::expiration_years(&state.pool).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get_states", get(get_states))
        .route("/get_expiration_months", get(get_expiration_months))
        .route("/get_expiration_years", get(get_expiration_years))
}
