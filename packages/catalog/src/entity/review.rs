use serde::Deserialize;

use super::validation::{Violations, is_valid_rating};
use super::{Attribute, Entity, EntityMeta};
use crate::error::Result;

/// Payload for posting a review.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct NewReview {
    /// Review body. Required.
    #[schema(example = "Great stay, would book again")]
    #[serde(alias = "comment")]
    pub text: Option<String>,
    /// Whole number from 1 to 5. Required.
    #[schema(example = 5)]
    pub rating: Option<i64>,
    /// Author id. Required.
    pub user_id: Option<String>,
    /// Reviewed place id. Required.
    pub place_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct ReviewPatch {
    #[serde(alias = "comment")]
    pub text: Option<String>,
    pub rating: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub meta: EntityMeta,
    pub text: String,
    pub rating: i64,
    pub user_id: String,
    pub place_id: String,
}

impl Review {
    pub fn new(data: NewReview) -> Result<Self> {
        let mut missing = Violations::new();
        missing.check(data.text.is_some(), "Missing required field: text");
        missing.check(data.rating.is_some(), "Missing required field: rating");
        missing.check(data.user_id.is_some(), "Missing required field: user_id");
        missing.check(data.place_id.is_some(), "Missing required field: place_id");
        missing.into_result()?;

        let review = Self {
            meta: EntityMeta::new(),
            text: data.text.unwrap_or_default(),
            rating: data.rating.unwrap_or_default(),
            user_id: data.user_id.unwrap_or_default(),
            place_id: data.place_id.unwrap_or_default(),
        };
        review.validate()?;
        Ok(review)
    }
}

impl Entity for Review {
    type Patch = ReviewPatch;

    const KIND: &'static str = "Review";

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn attribute(&self, name: &str) -> Option<Attribute<'_>> {
        match name {
            "id" => Some(Attribute::Text(&self.meta.id)),
            "text" => Some(Attribute::Text(&self.text)),
            "rating" => Some(Attribute::Integer(self.rating)),
            "user_id" => Some(Attribute::Text(&self.user_id)),
            "place_id" => Some(Attribute::Text(&self.place_id)),
            _ => None,
        }
    }

    fn validate(&self) -> Result<()> {
        let mut v = Violations::new();
        v.check(!self.text.trim().is_empty(), "Text is required");
        v.check(is_valid_rating(self.rating), "Rating must be between 1 and 5");
        v.check(!self.user_id.trim().is_empty(), "User id must not be empty");
        v.check(!self.place_id.trim().is_empty(), "Place id must not be empty");
        v.into_result()
    }

    fn merge(&mut self, patch: ReviewPatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
    }
}
