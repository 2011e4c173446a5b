use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use catalog::entity::{NewPlace, PlacePatch};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::place::PlaceResponse;
use crate::models::review::ReviewResponse;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Places",
    operation_id = "createPlace",
    summary = "List a new place",
    description = "Creates a place owned by an existing user. Every amenity id must refer to an existing amenity.",
    request_body = NewPlace,
    responses(
        (status = 201, description = "Place created", body = PlaceResponse),
        (status = 400, description = "Missing or invalid fields (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Owner or amenity not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(owner_id = ?payload.owner_id))]
pub async fn create_place(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewPlace>,
) -> Result<impl IntoResponse, AppError> {
    let place = state.write_catalog()?.create_place(payload)?;
    Ok((StatusCode::CREATED, Json(PlaceResponse::from(place))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Places",
    operation_id = "listPlaces",
    summary = "List places",
    responses(
        (status = 200, description = "All places in creation order", body = Vec<PlaceResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_places(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlaceResponse>>, AppError> {
    let places = state.read_catalog()?.get_all_places();
    Ok(Json(places.into_iter().map(PlaceResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Places",
    operation_id = "getPlace",
    summary = "Get a place by id",
    params(("id" = String, Path, description = "Place id")),
    responses(
        (status = 200, description = "Place found", body = PlaceResponse),
        (status = 404, description = "No such place (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlaceResponse>, AppError> {
    let place = state
        .read_catalog()?
        .get_place(&id)
        .ok_or_else(|| AppError::NotFound("Place not found".into()))?;
    Ok(Json(place.into()))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Places",
    operation_id = "updatePlace",
    summary = "Update a place",
    description = "The owner of a place cannot be changed.",
    params(("id" = String, Path, description = "Place id")),
    request_body = PlacePatch,
    responses(
        (status = 200, description = "Place updated", body = PlaceResponse),
        (status = 400, description = "Invalid fields (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Place or amenity not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<PlacePatch>,
) -> Result<Json<PlaceResponse>, AppError> {
    let place = state.write_catalog()?.update_place(&id, payload)?;
    Ok(Json(place.into()))
}

#[utoipa::path(
    get,
    path = "/{id}/reviews",
    tag = "Places",
    operation_id = "listPlaceReviews",
    summary = "List reviews of a place",
    params(("id" = String, Path, description = "Place id")),
    responses(
        (status = 200, description = "Reviews of the place", body = Vec<ReviewResponse>),
        (status = 404, description = "No such place (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_place_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = state.read_catalog()?.get_reviews_by_place(&id)?;
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}
