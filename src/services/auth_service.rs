use crate::{
    db::DbPool,
    dto::auth::LoginRequest,
    error::{AppError, AppResult},
    models::{User, UserPublic},
    response::{ApiResponse, Meta},
    security,
};

pub async fn login(pool: &DbPool, payload: LoginRequest) -> AppResult<ApiResponse<UserPublic>> {
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE username = $1")
        .bind(&payload.username)
        .fetch_optional(pool)
        .await?;
    let user = match user {
        Some(u) => u,
        None => {
            return Err(AppError::Unauthorized(
                "Invalid username or password".into(),
            ));
        }
    };

    let Some(stored) = user.password.as_deref() else {
        return Err(AppError::Unauthorized(
            "Password not set for this user".into(),
        ));
    };

    if !security::verify_password(&payload.password, stored) {
        return Err(AppError::Unauthorized(
            "Invalid username or password".into(),
        ));
    }

    // Password never leaves the service.
    Ok(ApiResponse::success(
        "Logged in",
        UserPublic::from(user),
        Some(Meta::empty()),
    ))
}

pub async fn me(pool: &DbPool, username: &str) -> AppResult<ApiResponse<UserPublic>> {
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    match user {
        Some(u) => Ok(ApiResponse::success(
            "Ok",
            UserPublic::from(u),
            Some(Meta::empty()),
        )),
        None => Err(AppError::NotFound),
    }
}
