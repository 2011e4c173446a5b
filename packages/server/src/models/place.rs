use catalog::{AmenityRef, PlaceDetails};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::amenity::AmenityResponse;
use super::review::ReviewResponse;
use super::user::OwnerResponse;

/// An amenity entry of a place: the full record, or the raw id when the
/// amenity no longer exists.
#[derive(Serialize, ToSchema)]
#[serde(untagged)]
pub enum PlaceAmenity {
    Amenity(AmenityResponse),
    Id(String),
}

impl From<AmenityRef> for PlaceAmenity {
    fn from(a: AmenityRef) -> Self {
        match a {
            AmenityRef::Resolved(amenity) => PlaceAmenity::Amenity(amenity.into()),
            AmenityRef::Unresolved(id) => PlaceAmenity::Id(id),
        }
    }
}

/// A place with owner, amenities and reviews resolved.
#[derive(Serialize, ToSchema)]
pub struct PlaceResponse {
    pub id: String,
    #[schema(example = "Loft")]
    pub title: String,
    pub description: String,
    #[schema(example = 120.0)]
    pub price: f64,
    #[schema(example = 48.85)]
    pub latitude: f64,
    #[schema(example = 2.35)]
    pub longitude: f64,
    pub owner_id: String,
    /// `null` when the owner no longer exists.
    pub owner: Option<OwnerResponse>,
    pub amenities: Vec<PlaceAmenity>,
    pub reviews: Vec<ReviewResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PlaceDetails> for PlaceResponse {
    fn from(d: PlaceDetails) -> Self {
        let PlaceDetails {
            place,
            owner,
            amenities,
            reviews,
        } = d;
        Self {
            id: place.meta.id,
            title: place.title,
            description: place.description,
            price: place.price,
            latitude: place.latitude,
            longitude: place.longitude,
            owner_id: place.owner_id,
            owner: owner.map(OwnerResponse::from),
            amenities: amenities.into_iter().map(PlaceAmenity::from).collect(),
            reviews: reviews.into_iter().map(ReviewResponse::from).collect(),
            created_at: place.meta.created_at,
            updated_at: place.meta.updated_at,
        }
    }
}
