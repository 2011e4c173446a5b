use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use catalog::entity::{NewUser, UserPatch};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::place::PlaceResponse;
use crate::models::user::UserResponse;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Users",
    operation_id = "createUser",
    summary = "Register a new user",
    description = "Creates a user. Email addresses are unique across all users.",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid fields (VALIDATION_ERROR) or email taken (DUPLICATE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.write_catalog()?.create_user(payload)?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Users",
    operation_id = "listUsers",
    summary = "List users",
    responses(
        (status = 200, description = "All users in registration order", body = Vec<UserResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.read_catalog()?.get_all_users();
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    operation_id = "getUser",
    summary = "Get a user by id",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "No such user (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .read_catalog()?
        .get_user(&id)
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Users",
    operation_id = "updateUser",
    summary = "Update a user",
    description = "Applies the supplied fields. The merged record is re-validated and nothing is written on failure.",
    params(("id" = String, Path, description = "User id")),
    request_body = UserPatch,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid fields (VALIDATION_ERROR) or email taken (DUPLICATE)", body = ErrorBody),
        (status = 404, description = "No such user (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UserPatch>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.write_catalog()?.update_user(&id, payload)?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    get,
    path = "/{id}/places",
    tag = "Users",
    operation_id = "listUserPlaces",
    summary = "List places owned by a user",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Places owned by the user", body = Vec<PlaceResponse>),
        (status = 404, description = "No such user (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_user_places(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PlaceResponse>>, AppError> {
    let places = state.read_catalog()?.get_places_by_owner(&id)?;
    Ok(Json(places.into_iter().map(PlaceResponse::from).collect()))
}
