use tracing::{debug, info, instrument};

use super::{Catalog, PlaceDetails};
use crate::entity::{Attribute, Entity, NewUser, User, UserPatch};
use crate::error::{CatalogError, Result};
use crate::repository::Repository;

const EMAIL_TAKEN: &str = "Email already registered";

impl Catalog {
    /// Register a user. The email must not belong to another user.
    #[instrument(skip_all, fields(email = %data.email))]
    pub fn create_user(&mut self, data: NewUser) -> Result<User> {
        if self.get_user_by_email(&data.email).is_some() {
            debug!("Rejected user: email already registered");
            return Err(CatalogError::duplicate(EMAIL_TAKEN));
        }

        let user = User::new(data)?;
        self.users.add(user.clone());
        info!(id = %user.id(), "Created user");
        Ok(user)
    }

    pub fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .find_by_attribute("email", Attribute::Text(email))
            .cloned()
    }

    pub fn get_all_users(&self) -> Vec<User> {
        self.users.get_all().into_iter().cloned().collect()
    }

    #[instrument(skip(self, patch))]
    pub fn update_user(&mut self, id: &str, patch: UserPatch) -> Result<User> {
        if self.users.get(id).is_none() {
            return Err(CatalogError::not_found("User not found"));
        }

        if let Some(email) = patch.email.as_deref()
            && let Some(owner) = self.users.find_by_attribute("email", Attribute::Text(email))
            && owner.id() != id
        {
            debug!("Rejected user update: email already registered");
            return Err(CatalogError::duplicate(EMAIL_TAKEN));
        }

        let user = self.users.update(id, patch)?.clone();
        info!("Updated user");
        Ok(user)
    }

    /// Places owned by `owner_id`, rebuilt from each place's stored owner id.
    pub fn get_places_by_owner(&self, owner_id: &str) -> Result<Vec<PlaceDetails>> {
        if self.users.get(owner_id).is_none() {
            return Err(CatalogError::not_found("User not found"));
        }

        Ok(self
            .places
            .filter_by_attribute("owner_id", Attribute::Text(owner_id))
            .into_iter()
            .map(|place| self.hydrate(place))
            .collect())
    }
}
