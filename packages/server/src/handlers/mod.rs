pub mod amenity;
pub mod place;
pub mod review;
pub mod user;
