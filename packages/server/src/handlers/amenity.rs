use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use catalog::entity::{AmenityPatch, NewAmenity};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::amenity::AmenityResponse;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Amenities",
    operation_id = "createAmenity",
    summary = "Create an amenity",
    description = "Amenity names are unique (exact match).",
    request_body = NewAmenity,
    responses(
        (status = 201, description = "Amenity created", body = AmenityResponse),
        (status = 400, description = "Invalid name (VALIDATION_ERROR) or name taken (DUPLICATE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_amenity(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewAmenity>,
) -> Result<impl IntoResponse, AppError> {
    let amenity = state.write_catalog()?.create_amenity(payload)?;
    Ok((StatusCode::CREATED, Json(AmenityResponse::from(amenity))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Amenities",
    operation_id = "listAmenities",
    summary = "List amenities",
    responses(
        (status = 200, description = "All amenities in creation order", body = Vec<AmenityResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_amenities(
    State(state): State<AppState>,
) -> Result<Json<Vec<AmenityResponse>>, AppError> {
    let amenities = state.read_catalog()?.get_all_amenities();
    Ok(Json(amenities.into_iter().map(AmenityResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Amenities",
    operation_id = "getAmenity",
    summary = "Get an amenity by id",
    params(("id" = String, Path, description = "Amenity id")),
    responses(
        (status = 200, description = "Amenity found", body = AmenityResponse),
        (status = 404, description = "No such amenity (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_amenity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AmenityResponse>, AppError> {
    let amenity = state
        .read_catalog()?
        .get_amenity(&id)
        .ok_or_else(|| AppError::NotFound("Amenity not found".into()))?;
    Ok(Json(amenity.into()))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Amenities",
    operation_id = "updateAmenity",
    summary = "Update an amenity",
    params(("id" = String, Path, description = "Amenity id")),
    request_body = AmenityPatch,
    responses(
        (status = 200, description = "Amenity updated", body = AmenityResponse),
        (status = 400, description = "Invalid name (VALIDATION_ERROR) or name taken (DUPLICATE)", body = ErrorBody),
        (status = 404, description = "No such amenity (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_amenity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<AmenityPatch>,
) -> Result<Json<AmenityResponse>, AppError> {
    let amenity = state.write_catalog()?.update_amenity(&id, payload)?;
    Ok(Json(amenity.into()))
}
