use tracing::{debug, info, instrument};

use super::{AmenityRef, Catalog, PlaceDetails};
use crate::entity::{Attribute, Entity, NewPlace, Place, PlacePatch};
use crate::error::{CatalogError, Result};
use crate::repository::Repository;

impl Catalog {
    /// List a place for an existing owner.
    ///
    /// Field rules are checked first, then the owner, then each amenity id
    /// in order; the first unknown amenity id fails the call.
    #[instrument(skip_all, fields(owner_id = ?data.owner_id))]
    pub fn create_place(&mut self, data: NewPlace) -> Result<PlaceDetails> {
        let place = Place::new(data)?;

        if self.users.get(&place.owner_id).is_none() {
            debug!("Rejected place: unknown owner");
            return Err(CatalogError::not_found("Owner not found"));
        }
        self.ensure_amenities(&place.amenities)?;

        let details = self.hydrate(&place);
        self.places.add(place);
        info!(id = %details.place.id(), "Created place");
        Ok(details)
    }

    pub fn get_place(&self, id: &str) -> Option<PlaceDetails> {
        self.places.get(id).map(|place| self.hydrate(place))
    }

    pub fn get_all_places(&self) -> Vec<PlaceDetails> {
        self.places
            .get_all()
            .into_iter()
            .map(|place| self.hydrate(place))
            .collect()
    }

    /// Update a place. A supplied amenity list replaces the current one
    /// once every id in it resolves.
    #[instrument(skip(self, patch))]
    pub fn update_place(&mut self, id: &str, patch: PlacePatch) -> Result<PlaceDetails> {
        if self.places.get(id).is_none() {
            return Err(CatalogError::not_found("Place not found"));
        }
        if let Some(amenities) = &patch.amenities {
            self.ensure_amenities(amenities)?;
        }

        let place = self.places.update(id, patch)?.clone();
        info!("Updated place");
        Ok(self.hydrate(&place))
    }

    /// Resolve owner, amenities and reviews of `place`. Never fails: an
    /// owner that no longer resolves becomes `None` and an unknown amenity
    /// id is kept as [`AmenityRef::Unresolved`].
    pub(super) fn hydrate(&self, place: &Place) -> PlaceDetails {
        let amenities = place
            .amenities
            .iter()
            .map(|id| match self.amenities.get(id) {
                Some(amenity) => AmenityRef::Resolved(amenity.clone()),
                None => AmenityRef::Unresolved(id.clone()),
            })
            .collect();

        let reviews = self
            .reviews
            .filter_by_attribute("place_id", Attribute::Text(place.id()))
            .into_iter()
            .cloned()
            .collect();

        PlaceDetails {
            place: place.clone(),
            owner: self.users.get(&place.owner_id).cloned(),
            amenities,
            reviews,
        }
    }
}
