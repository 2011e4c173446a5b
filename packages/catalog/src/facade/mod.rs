//! Cross-entity rules and read-time hydration.
//!
//! [`Catalog`] owns one repository per record kind. Every rule that spans
//! more than one kind (uniqueness, existence of referenced records) lives
//! here; the records themselves only know their own field rules.

mod amenities;
mod places;
mod reviews;
mod users;


use std::sync::{Arc, RwLock};

use crate::entity::{Amenity, Place, Review, User};
use crate::repository::InMemoryRepository;

/// A catalog shared between request handlers. Writers hold the write lock
/// for the whole check-then-insert sequence of an operation.
pub type SharedCatalog = Arc<RwLock<Catalog>>;

#[derive(Debug, Default)]
pub struct Catalog {
    users: InMemoryRepository<User>,
    amenities: InMemoryRepository<Amenity>,
    places: InMemoryRepository<Place>,
    reviews: InMemoryRepository<Review>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_shared(self) -> SharedCatalog {
        Arc::new(RwLock::new(self))
    }
}

/// A place with its references resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetails {
    pub place: Place,
    /// `None` when the stored owner id no longer resolves.
    pub owner: Option<User>,
    pub amenities: Vec<AmenityRef>,
    pub reviews: Vec<Review>,
}

/// One entry of a hydrated amenity list.
#[derive(Debug, Clone, PartialEq)]
pub enum AmenityRef {
    Resolved(Amenity),
    /// The id did not resolve and is passed through unchanged.
    Unresolved(String),
}
