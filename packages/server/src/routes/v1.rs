use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/users", user_routes())
        .nest("/amenities", amenity_routes())
        .nest("/places", place_routes())
        .nest("/reviews", review_routes())
}

fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::user::create_user,
            handlers::user::list_users
        ))
        .routes(routes!(
            handlers::user::get_user,
            handlers::user::update_user
        ))
        .routes(routes!(handlers::user::list_user_places))
}

fn amenity_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::amenity::create_amenity,
            handlers::amenity::list_amenities
        ))
        .routes(routes!(
            handlers::amenity::get_amenity,
            handlers::amenity::update_amenity
        ))
}

fn place_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::place::create_place,
            handlers::place::list_places
        ))
        .routes(routes!(
            handlers::place::get_place,
            handlers::place::update_place
        ))
        .routes(routes!(handlers::place::list_place_reviews))
}

fn review_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::review::create_review,
            handlers::review::list_reviews
        ))
        .routes(routes!(
            handlers::review::get_review,
            handlers::review::update_review,
            handlers::review::delete_review
        ))
}
