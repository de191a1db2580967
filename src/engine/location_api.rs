use super::Engine;

use async_trait::async_trait;
use sqlx::{Executor, Row};

use crate::{
    api::LocationAPI,
    entities::{validate_radius_km, Coordinates, Location, NewLocation},
    error::Error,
    geo,
};

#[async_trait]
impl LocationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_location(&self, new_location: NewLocation) -> Result<Location, Error> {
        new_location.coordinates().validate()?;

        let mut conn = self.pool.acquire().await?;

        // Coordinates are stored as fixed-point NUMERIC; read back the stored
        // values so the response reflects what was persisted.
        let row = conn
            .fetch_one(
                sqlx::query(
                    "INSERT INTO locations (name, category, latitude, longitude)
                     VALUES ($1, $2, $3, $4)
                     RETURNING id, latitude::FLOAT8 AS latitude, longitude::FLOAT8 AS longitude",
                )
                .bind(&new_location.name)
                .bind(&new_location.category)
                .bind(new_location.latitude)
                .bind(new_location.longitude),
            )
            .await?;

        Ok(Location {
            id: row.try_get("id")?,
            name: new_location.name,
            category: new_location.category,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            distance_km: None,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn find_nearby(
        &self,
        origin: Coordinates,
        radius_km: f64,
    ) -> Result<Vec<Location>, Error> {
        origin.validate()?;
        validate_radius_km(radius_km)?;

        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(sqlx::query(
                "SELECT id, name, category,
                        latitude::FLOAT8 AS latitude, longitude::FLOAT8 AS longitude
                 FROM locations",
            ))
            .await?;

        let mut locations = Vec::with_capacity(rows.len());

        for row in rows.iter() {
            locations.push(Location {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                category: row.try_get("category")?,
                latitude: row.try_get("latitude")?,
                longitude: row.try_get("longitude")?,
                distance_km: None,
            });
        }

        Ok(geo::rank_nearby(locations, &origin, radius_km))
    }
}
