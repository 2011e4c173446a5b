use serde::Deserialize;

use super::validation::{
    Violations, is_valid_latitude, is_valid_longitude, is_valid_price, is_valid_text,
};
use super::{Attribute, Entity, EntityMeta};
use crate::error::Result;

pub const TITLE_MAX_CHARS: usize = 100;

/// Payload for listing a place.
///
/// Required fields are optional here so that a missing one can be reported
/// by name instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct NewPlace {
    /// Title (1-100 characters). Required.
    #[schema(example = "Loft")]
    pub title: Option<String>,
    pub description: Option<String>,
    /// Nightly price, at least 0. Required.
    #[schema(example = 100.0)]
    pub price: Option<f64>,
    /// Required, -90 to 90.
    #[schema(example = 48.85)]
    pub latitude: Option<f64>,
    /// Required, -180 to 180.
    #[schema(example = 2.35)]
    pub longitude: Option<f64>,
    /// Id of an existing user. Required.
    pub owner_id: Option<String>,
    /// Ids of existing amenities, in display order.
    pub amenities: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct PlacePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Replaces the whole amenity list.
    pub amenities: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub meta: EntityMeta,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    /// Amenity ids, resolved on read.
    pub amenities: Vec<String>,
}

impl Place {
    /// Build a validated place. All required fields must be present.
    pub fn new(data: NewPlace) -> Result<Self> {
        let mut missing = Violations::new();
        missing.check(data.title.is_some(), "Missing required field: title");
        missing.check(data.price.is_some(), "Missing required field: price");
        missing.check(data.latitude.is_some(), "Missing required field: latitude");
        missing.check(data.longitude.is_some(), "Missing required field: longitude");
        missing.check(data.owner_id.is_some(), "Missing required field: owner_id");
        missing.into_result()?;

        let place = Self {
            meta: EntityMeta::new(),
            title: data.title.unwrap_or_default(),
            description: data.description.unwrap_or_default(),
            price: data.price.unwrap_or_default(),
            latitude: data.latitude.unwrap_or_default(),
            longitude: data.longitude.unwrap_or_default(),
            owner_id: data.owner_id.unwrap_or_default(),
            amenities: data.amenities.unwrap_or_default(),
        };
        place.validate()?;
        Ok(place)
    }
}

impl Entity for Place {
    type Patch = PlacePatch;

    const KIND: &'static str = "Place";

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn attribute(&self, name: &str) -> Option<Attribute<'_>> {
        match name {
            "id" => Some(Attribute::Text(&self.meta.id)),
            "title" => Some(Attribute::Text(&self.title)),
            "description" => Some(Attribute::Text(&self.description)),
            "price" => Some(Attribute::Number(self.price)),
            "latitude" => Some(Attribute::Number(self.latitude)),
            "longitude" => Some(Attribute::Number(self.longitude)),
            "owner_id" => Some(Attribute::Text(&self.owner_id)),
            _ => None,
        }
    }

    fn validate(&self) -> Result<()> {
        let mut v = Violations::new();
        v.check(
            is_valid_text(&self.title, TITLE_MAX_CHARS),
            "Title must be 1-100 characters",
        );
        v.check(
            is_valid_price(self.price),
            "Price must be greater than or equal to 0",
        );
        v.check(
            is_valid_latitude(self.latitude),
            "Latitude must be between -90 and 90",
        );
        v.check(
            is_valid_longitude(self.longitude),
            "Longitude must be between -180 and 180",
        );
        v.check(!self.owner_id.trim().is_empty(), "Owner id must not be empty");
        v.into_result()
    }

    fn merge(&mut self, patch: PlacePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = longitude;
        }
        if let Some(amenities) = patch.amenities {
            self.amenities = amenities;
        }
    }
}
