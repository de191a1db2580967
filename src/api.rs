use async_trait::async_trait;

use crate::entities::{Coordinates, Location, NewLocation};
use crate::error::Error;

#[async_trait]
pub trait LocationAPI {
    async fn create_location(&self, new_location: NewLocation) -> Result<Location, Error>;

    async fn find_nearby(&self, origin: Coordinates, radius_km: f64)
        -> Result<Vec<Location>, Error>;
}

pub trait API: LocationAPI {}
