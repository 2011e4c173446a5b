//! Domain core of the rental catalog: users, amenities, places and reviews.
//!
//! Records are validated on construction and on every update, stored in one
//! [`InMemoryRepository`](repository::InMemoryRepository) per kind, and
//! linked only by id. The [`Catalog`] facade enforces the rules that span
//! several kinds and resolves ids into [`PlaceDetails`] on read.

pub mod entity;
pub mod error;
pub mod facade;
pub mod repository;

pub use error::{CatalogError, Result};
pub use facade::{AmenityRef, Catalog, PlaceDetails, SharedCatalog};
