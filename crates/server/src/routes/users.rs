use axum::{extract::State, Json};
use serde::Serialize;

use service::auth::domain::PublicUser;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct UsersOutput {
    pub users: Vec<PublicUser>,
}

#[utoipa::path(get, path = "/users", tag = "users", responses((status = 200, description = "All registered users", body = crate::openapi::UsersResponse)))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<UsersOutput>, ApiError> {
    let users = state.auth.list_users().await?;
    Ok(Json(UsersOutput { users }))
}
