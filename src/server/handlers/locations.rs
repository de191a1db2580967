use axum::extract::{Extension, Json, Query};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Location, NewLocation};
use crate::error::Error;
use crate::server::DynAPI;

const DEFAULT_RADIUS_KM: f64 = 5.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct NearbyParams {
    lat: f64,
    lon: f64,
    radius_km: Option<f64>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<NewLocation>,
) -> Result<(StatusCode, Json<Location>), Error> {
    let location = api.create_location(params).await?;

    Ok((StatusCode::CREATED, location.into()))
}

pub async fn nearby(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<Vec<Location>>, Error> {
    let origin = Coordinates {
        latitude: params.lat,
        longitude: params.lon,
    };

    let locations = api
        .find_nearby(origin, params.radius_km.unwrap_or(DEFAULT_RADIUS_KM))
        .await?;

    Ok(locations.into())
}
