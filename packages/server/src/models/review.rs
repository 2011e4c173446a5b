use catalog::entity::Review;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: String,
    #[schema(example = "Great stay, would book again.")]
    pub text: String,
    #[schema(minimum = 1, maximum = 5, example = 5)]
    pub rating: i64,
    pub user_id: String,
    pub place_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            id: r.meta.id,
            text: r.text,
            rating: r.rating,
            user_id: r.user_id,
            place_id: r.place_id,
            created_at: r.meta.created_at,
            updated_at: r.meta.updated_at,
        }
    }
}
