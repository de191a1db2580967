mod location;

pub use location::{validate_radius_km, Coordinates, Location, NewLocation};
