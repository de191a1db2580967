mod location_api;

use sqlx::{Executor, Pool, Postgres};

use crate::{api::API, error::Error};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
}

impl Engine {
    /// Runs the idempotent schema initialization; call once at process start,
    /// before serving requests.
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        pool.execute(
            "CREATE TABLE IF NOT EXISTS locations (
                id SERIAL PRIMARY KEY,
                name VARCHAR NOT NULL,
                category VARCHAR NOT NULL,
                latitude NUMERIC(10, 8) NOT NULL,
                longitude NUMERIC(11, 8) NOT NULL
            )",
        )
        .await?;

        Ok(Self { pool })
    }
}

impl API for Engine {}
