use serde::Deserialize;

use super::validation::{Violations, is_valid_text};
use super::{Attribute, Entity, EntityMeta};
use crate::error::Result;

pub const NAME_MAX_CHARS: usize = 50;

/// Payload for creating an amenity.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct NewAmenity {
    /// Unique amenity name (1-50 characters).
    #[schema(example = "WiFi")]
    #[serde(default)]
    pub name: String,
    #[schema(example = "Fibre connection in every room")]
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct AmenityPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amenity {
    pub meta: EntityMeta,
    pub name: String,
    pub description: String,
}

impl Amenity {
    pub fn new(data: NewAmenity) -> Result<Self> {
        let amenity = Self {
            meta: EntityMeta::new(),
            name: data.name,
            description: data.description,
        };
        amenity.validate()?;
        Ok(amenity)
    }
}

impl Entity for Amenity {
    type Patch = AmenityPatch;

    const KIND: &'static str = "Amenity";

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn attribute(&self, name: &str) -> Option<Attribute<'_>> {
        match name {
            "id" => Some(Attribute::Text(&self.meta.id)),
            "name" => Some(Attribute::Text(&self.name)),
            "description" => Some(Attribute::Text(&self.description)),
            _ => None,
        }
    }

    fn validate(&self) -> Result<()> {
        let mut v = Violations::new();
        v.check(
            is_valid_text(&self.name, NAME_MAX_CHARS),
            "Amenity name must be 1-50 characters",
        );
        v.into_result()
    }

    fn merge(&mut self, patch: AmenityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}
