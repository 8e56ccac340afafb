use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

use crate::api::AppState;
use crate::error::{require, AppError, Result};
use crate::models::user::{CreateUserData, User, UserSearchResult};
use crate::services::login::LoginIdentifier;
use crate::services::password;

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    query: String,
}

/// GET /search_users?query=...
///
/// An empty query matches broadly; the LIMIT in the model caps the damage.
async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<UserSearchResult>>> {
    let results = User::search(&state.pool, params.query.trim()).await?;
    Ok(Json(results))
}

#[derive(Debug, Deserialize)]
struct AddUserRequest {
    first_name: Option<String>,
    middle_name: Option<String>,
    last_name: Option<String>,
    phone_number: Option<String>,
    email_id: Option<String>,
    password: Option<String>,
    username: Option<String>,
}

/// POST /add_user
async fn add_user(
    State(state): State<AppState>,
    Json(body): Json<AddUserRequest>,
) -> Result<(StatusCode, Json<JsonValue>)> {
    let first_name = require("first_name", body.first_name)?;
    let last_name = require("last_name", body.last_name)?;
    let phone_number = require("phone_number", body.phone_number)?;
    let email_id = require("email_id", body.email_id)?;
    let password_plain = require("password", body.password)?;
    let username = require("username", body.username)?;
    let middle_name = body.middle_name.unwrap_or_default();

    // Sequential uniqueness checks; the first hit wins and names its field.
    if User::find_by_username(&state.pool, &username).await?.is_some() {
        return Err(AppError::Conflict {
            field: "username",
            message: "Username is taken".to_string(),
        });
    }
    if User::find_by_email(&state.pool, &email_id).await?.is_some() {
        return Err(AppError::Conflict {
            field: "email_id",
            message: "Email is taken".to_string(),
        });
    }
    if User::find_by_phone(&state.pool, &phone_number).await?.is_some() {
        return Err(AppError::Conflict {
            field: "phone_number",
            message: "Phone number is taken".to_string(),
        });
    }

    let user = User::create(
        &state.pool,
        CreateUserData {
            first_name,
            middle_name,
            last_name,
            phone_number,
            email_id,
            password_hash: password::hash_password(&password_plain)?,
            username,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created", "user_id": user.id })),
    ))
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    user_input: Option<String>,
    password: Option<String>,
}

/// POST /login_user
async fn login_user(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<JsonValue>> {
    let (user_input, password_plain) = match (body.user_input, body.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => {
            return Err(AppError::BadRequest(
                "Missing username/email or password".to_string(),
            ))
        }
    };

    let identifier = LoginIdentifier::classify(&user_input);
    let user = match identifier {
        LoginIdentifier::Email => User::find_by_email(&state.pool, &user_input).await?,
        LoginIdentifier::Username => User::find_by_username(&state.pool, &user_input).await?,
    }
    .ok_or_else(|| AppError::Unauthorized(identifier.not_found_message().to_string()))?;

    if !password::verify_password(&password_plain, &user.password_hash)? {
        return Err(AppError::Unauthorized(
            identifier.bad_password_message().to_string(),
        ));
    }

    tracing::info!(user_id = user.id, "user logged in");

    Ok(Json(json!({ "message": "Login successful", "user_id": user.id })))
}

/// GET /user/:user_id
async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<JsonValue>> {
    let user = User::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(json!({
        "first_name": user.first_name,
        "last_name": user.last_name,
        "email_id": user.email_id,
        "username": user.username,
    })))
}

/// GET /get_user_by_username/:username
async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<JsonValue>> {
    let user = User::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(json!({
        "first_name": user.first_name,
        "last_name": user.last_name,
        "username": user.username,
    })))
}

/// GET /validate_username/:username
async fn validate_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<JsonValue>> {
    let exists = User::username_exists(&state.pool, &username).await?;
    Ok(Json(json!({ "exists": exists })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search_users", get(search_users))
        .route("/add_user", post(add_user))
        .route("/login_user", post(login_user))
        .route("/user/:user_id", get(get_user))
        .route("/get_user_by_username/:username", get(get_user_by_username))
        .route("/validate_username/:username", get(validate_username))
}
