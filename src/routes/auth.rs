use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};

use crate::{
    dto::auth::{LoginRequest, MeQuery},
    error::AppResult,
    models::UserPublic,
    response::ApiResponse,
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me))
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credential check, user without password field", body = ApiResponse<UserPublic>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<UserPublic>>> {
    let resp = auth_service::login(&state.pool, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(get, path = "/api/me", tag = "Auth")]
pub async fn me(
    State(state): State<AppState>,
    Query(query): Query<MeQuery>,
) -> AppResult<Json<ApiResponse<UserPublic>>> {
    let resp = auth_service::me(&state.pool, &query.username).await?;
    Ok(Json(resp))
}
