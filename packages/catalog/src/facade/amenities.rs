use tracing::{debug, info, instrument};

use super::Catalog;
use crate::entity::{Amenity, AmenityPatch, Attribute, Entity, NewAmenity};
use crate::error::{CatalogError, Result};
use crate::repository::Repository;

const NAME_TAKEN: &str = "Amenity with this name already exists";

impl Catalog {
    /// Create an amenity. Names are unique, compared case-sensitively.
    #[instrument(skip_all, fields(name = %data.name))]
    pub fn create_amenity(&mut self, data: NewAmenity) -> Result<Amenity> {
        if data.name.trim().is_empty() {
            return Err(CatalogError::validation(
                "Amenity must have a non-empty name",
            ));
        }
        if self.name_owner(&data.name).is_some() {
            debug!("Rejected amenity: name already exists");
            return Err(CatalogError::duplicate(NAME_TAKEN));
        }

        let amenity = Amenity::new(data)?;
        self.amenities.add(amenity.clone());
        info!(id = %amenity.id(), "Created amenity");
        Ok(amenity)
    }

    pub fn get_amenity(&self, id: &str) -> Option<Amenity> {
        self.amenities.get(id).cloned()
    }

    pub fn get_all_amenities(&self) -> Vec<Amenity> {
        self.amenities.get_all().into_iter().cloned().collect()
    }

    #[instrument(skip(self, patch))]
    pub fn update_amenity(&mut self, id: &str, patch: AmenityPatch) -> Result<Amenity> {
        if self.amenities.get(id).is_none() {
            return Err(CatalogError::not_found("Amenity not found"));
        }

        if let Some(name) = patch.name.as_deref()
            && let Some(owner) = self.name_owner(name)
            && owner != id
        {
            debug!("Rejected amenity update: name already exists");
            return Err(CatalogError::duplicate(NAME_TAKEN));
        }

        let amenity = self.amenities.update(id, patch)?.clone();
        info!("Updated amenity");
        Ok(amenity)
    }

    /// Id of the amenity called exactly `name`, if any.
    fn name_owner(&self, name: &str) -> Option<&str> {
        self.amenities
            .find_by_attribute("name", Attribute::Text(name))
            .map(|amenity| amenity.id())
    }

    /// Fail with the first id in `ids` that names no amenity.
    pub(super) fn ensure_amenities(&self, ids: &[String]) -> Result<()> {
        match ids.iter().find(|id| self.amenities.get(id.as_str()).is_none()) {
            Some(missing) => {
                debug!(amenity_id = %missing, "Unknown amenity");
                Err(CatalogError::not_found(format!(
                    "Amenity not found: {missing}"
                )))
            }
            None => Ok(()),
        }
    }
}
