use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use serde::Serialize;

use service::auth::domain::{LoginInput, PublicUser, RegisterInput};

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct RegisterOutput {
    pub message: &'static str,
    pub user: PublicUser,
}

#[derive(Serialize)]
pub struct LoginOutput {
    pub message: &'static str,
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = crate::openapi::RegisterRequest,
    responses(
        (status = 201, description = "Registered", body = crate::openapi::RegisterResponse),
        (status = 400, description = "Invalid input or email already registered", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Internal error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<ServerState>,
    payload: Result<Json<RegisterInput>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterOutput>), ApiError> {
    let Json(input) = payload?;
    let user = state.auth.register(input).await?;
    Ok((StatusCode::CREATED, Json(RegisterOutput { message: "user registered successfully", user })))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = crate::openapi::LoginResponse),
        (status = 400, description = "Invalid input", body = crate::openapi::ErrorResponse),
        (status = 401, description = "Invalid email or password", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<LoginOutput>, ApiError> {
    let Json(input) = payload?;
    let token = state.auth.login(input).await?;
    Ok(Json(LoginOutput { message: "login successful", token }))
}
