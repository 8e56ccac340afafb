use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

use crate::api::AppState;
use crate::error::{require, AppError, Result};
use crate::models::card::{Card, CardSummary, CreateCardData};
use crate::services::card_number;

#[derive(Debug, Deserialize)]
struct AddCardRequest {
    user_id: Option<i32>,
    card_number: Option<String>,
    name_on_card: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    // Wire key is "zip", stored as zip_code.
    zip: Option<String>,
    expiry_month: Option<String>,
    expiry_year: Option<String>,
    cvv: Option<String>,
}

/// POST /add_card
///
/// No existence check against the users table; the card simply records the
/// submitted user_id.
async fn add_card(
    State(state): State<AppState>,
    Json(body): Json<AddCardRequest>,
) -> Result<(StatusCode, Json<JsonValue>)> {
    let user_id = require("user_id", body.user_id)?;
    let submitted_number = require("card_number", body.card_number)?;

    let card = Card::create(
        &state.pool,
        CreateCardData {
            user_id,
            card_number: card_number::last_four(&submitted_number).to_string(),
            name_on_card: require("name_on_card", body.name_on_card)?,
            address: require("address", body.address)?,
            city: require("city", body.city)?,
            state: require("state", body.state)?,
            zip_code: require("zip", body.zip)?,
            expiry_month: require("expiry_month", body.expiry_month)?,
            expiry_year: require("expiry_year", body.expiry_year)?,
            cvv: require("cvv", body.cvv)?,
        },
    )
    .await?;

    tracing::info!(card_id = card.id, user_id, "card added");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Card added successfully" })),
    ))
}

/// GET /get_user_cards/:user_id
async fn get_user_cards(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<CardSummary>>> {
    let cards = Card::list_by_user(&state.pool, user_id).await?;
    Ok(Json(cards))
}

/// DELETE /delete_card/:card_id
async fn delete_card(
    State(state): State<AppState>,
    Path(card_id): Path<i32>,
) -> Result<Json<JsonValue>> {
    if !Card::delete(&state.pool, card_id).await? {
        return Err(AppError::NotFound("Card not found".to_string()));
    }

    tracing::info!(card_id, "card deleted");

    Ok(Json(json!({ "message": "Card deleted" })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add_card", post(add_card))
        .route("/get_user_cards/:user_id", get(get_user_cards))
        .route("/delete_card/:card_id", delete(delete_card))
}
