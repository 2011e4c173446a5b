//! Catalog records and their construction-time rules.
//!
//! Records refer to each other only by id. Resolving an id into the record
//! it names is the job of the [`Catalog`](crate::Catalog) facade.

mod amenity;
mod place;
mod review;
mod user;
pub mod validation;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;

pub use amenity::{Amenity, AmenityPatch, NewAmenity};
pub use place::{NewPlace, Place, PlacePatch};
pub use review::{NewReview, Review, ReviewPatch};
pub use user::{NewUser, User, UserPatch};

/// Identity and timestamps shared by every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMeta {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntityMeta {
    /// Fresh identity with a random v4 UUID.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at` after a mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for EntityMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed value of a named attribute, used for equality lookups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attribute<'a> {
    Text(&'a str),
    Flag(bool),
    Integer(i64),
    Number(f64),
}

/// A record kind stored in a [`Repository`](crate::repository::Repository).
pub trait Entity: Clone + Send + Sync + 'static {
    /// Partial update accepted by [`Entity::apply`]. Its fields are the
    /// allow-list of updatable attributes.
    type Patch;

    /// Human-readable kind, used in not-found messages.
    const KIND: &'static str;

    fn meta(&self) -> &EntityMeta;

    fn meta_mut(&mut self) -> &mut EntityMeta;

    fn id(&self) -> &str {
        &self.meta().id
    }

    /// Look up an attribute by name. Unknown names yield `None`.
    fn attribute(&self, name: &str) -> Option<Attribute<'_>>;

    /// Check every field rule, reporting all violations together.
    fn validate(&self) -> Result<()>;

    /// Overwrite each attribute present in `patch`.
    fn merge(&mut self, patch: Self::Patch);

    /// Merge `patch`, re-validate the merged record and refresh
    /// `updated_at`. On failure `self` is left untouched.
    fn apply(&mut self, patch: Self::Patch) -> Result<()> {
        let mut next = self.clone();
        next.merge(patch);
        next.validate()?;
        next.meta_mut().touch();
        *self = next;
        Ok(())
    }
}
