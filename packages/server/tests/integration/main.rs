mod common;

mod amenity;
mod place;
