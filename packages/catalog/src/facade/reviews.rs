use tracing::{debug, info, instrument};

use super::Catalog;
use crate::entity::{Attribute, Entity, NewReview, Review, ReviewPatch};
use crate::error::{CatalogError, Result};
use crate::repository::Repository;

impl Catalog {
    /// Post a review. Author and place must both exist; a user may review
    /// the same place any number of times.
    #[instrument(skip_all, fields(user_id = ?data.user_id, place_id = ?data.place_id))]
    pub fn create_review(&mut self, data: NewReview) -> Result<Review> {
        let review = Review::new(data)?;

        if self.users.get(&review.user_id).is_none() {
            debug!("Rejected review: unknown user");
            return Err(CatalogError::not_found("User not found"));
        }
        if self.places.get(&review.place_id).is_none() {
            debug!("Rejected review: unknown place");
            return Err(CatalogError::not_found("Place not found"));
        }

        self.reviews.add(review.clone());
        info!(id = %review.id(), "Created review");
        Ok(review)
    }

    pub fn get_review(&self, id: &str) -> Option<Review> {
        self.reviews.get(id).cloned()
    }

    pub fn get_all_reviews(&self) -> Vec<Review> {
        self.reviews.get_all().into_iter().cloned().collect()
    }

    pub fn get_reviews_by_place(&self, place_id: &str) -> Result<Vec<Review>> {
        if self.places.get(place_id).is_none() {
            return Err(CatalogError::not_found("Place not found"));
        }

        Ok(self
            .reviews
            .filter_by_attribute("place_id", Attribute::Text(place_id))
            .into_iter()
            .cloned()
            .collect())
    }

    #[instrument(skip(self, patch))]
    pub fn update_review(&mut self, id: &str, patch: ReviewPatch) -> Result<Review> {
        let review = self.reviews.update(id, patch)?.clone();
        info!("Updated review");
        Ok(review)
    }

    #[instrument(skip(self))]
    pub fn delete_review(&mut self, id: &str) -> Result<()> {
        if !self.reviews.delete(id) {
            return Err(CatalogError::not_found("Review not found"));
        }
        info!("Deleted review");
        Ok(())
    }
}
