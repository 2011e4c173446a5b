use catalog::entity::Amenity;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct AmenityResponse {
    pub id: String,
    #[schema(example = "Wi-Fi")]
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Amenity> for AmenityResponse {
    fn from(a: Amenity) -> Self {
        Self {
            id: a.meta.id,
            name: a.name,
            description: a.description,
            created_at: a.meta.created_at,
            updated_at: a.meta.updated_at,
        }
    }
}
