pub mod overpass;

pub use overpass::{FetchError, OverpassResponse, fetch_amenities};
