pub mod amenity;
pub mod place;

pub use amenity::Amenity;
pub use place::Place;
