use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use catalog::entity::{NewReview, ReviewPatch};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::review::ReviewResponse;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Reviews",
    operation_id = "createReview",
    summary = "Review a place",
    description = "`comment` is accepted as an alias of `text`.",
    request_body = NewReview,
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 400, description = "Missing or invalid fields (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "User or place not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(place_id = ?payload.place_id))]
pub async fn create_review(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewReview>,
) -> Result<impl IntoResponse, AppError> {
    let review = state.write_catalog()?.create_review(payload)?;
    Ok((StatusCode::CREATED, Json(ReviewResponse::from(review))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Reviews",
    operation_id = "listReviews",
    summary = "List reviews",
    responses(
        (status = 200, description = "All reviews in creation order", body = Vec<ReviewResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = state.read_catalog()?.get_all_reviews();
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Reviews",
    operation_id = "getReview",
    summary = "Get a review by id",
    params(("id" = String, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review found", body = ReviewResponse),
        (status = 404, description = "No such review (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReviewResponse>, AppError> {
    let review = state
        .read_catalog()?
        .get_review(&id)
        .ok_or_else(|| AppError::NotFound("Review not found".into()))?;
    Ok(Json(review.into()))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Reviews",
    operation_id = "updateReview",
    summary = "Update a review",
    description = "Only `text` and `rating` can be changed.",
    params(("id" = String, Path, description = "Review id")),
    request_body = ReviewPatch,
    responses(
        (status = 200, description = "Review updated", body = ReviewResponse),
        (status = 400, description = "Invalid fields (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "No such review (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<ReviewPatch>,
) -> Result<Json<ReviewResponse>, AppError> {
    let review = state.write_catalog()?.update_review(&id, payload)?;
    Ok(Json(review.into()))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Reviews",
    operation_id = "deleteReview",
    summary = "Delete a review",
    params(("id" = String, Path, description = "Review id")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "No such review (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.write_catalog()?.delete_review(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
