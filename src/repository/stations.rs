//! Stations repository for database operations

use chrono::Utc;
use sqlx::{types::Json, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::station::{CreateStation, Station, StationStatus, UpdateStation},
};

#[derive(Clone)]
pub struct StationsRepository {
    pool: Pool<Postgres>,
}

impl StationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all stations
    pub async fn list(&self) -> AppResult<Vec<Station>> {
        let rows = sqlx::query_as::<_, Station>("SELECT * FROM stations ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get station by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Station> {
        sqlx::query_as::<_, Station>("SELECT * FROM stations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Station with id {} not found", id)))
    }

    /// Create a station
    pub async fn create(&self, data: &CreateStation) -> AppResult<Station> {
        let row = sqlx::query_as::<_, Station>(
            r#"
            INSERT INTO stations (name, station_type, price, status, description, image, specs)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.station_type)
        .bind(data.price)
        .bind(data.status.unwrap_or(StationStatus::Available))
        .bind(&data.description)
        .bind(&data.image)
        .bind(data.specs.as_ref().map(Json))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a station
    pub async fn update(&self, id: i32, data: &UpdateStation) -> AppResult<Station> {
        let now = Utc::now();
        let mut sets = vec!["modified_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.name, "name");
        add_field!(data.station_type, "station_type");
        add_field!(data.price, "price");
        add_field!(data.status, "status");
        add_field!(data.description, "description");
        add_field!(data.image, "image");
        add_field!(data.specs, "specs");

        let query = format!("UPDATE stations SET {} WHERE id = {} RETURNING *", sets.join(", "), id);

        let mut builder = sqlx::query_as::<_, Station>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.station_type);
        bind_field!(data.price);
        bind_field!(data.status);
        bind_field!(data.description);
        bind_field!(data.image);
        if let Some(ref specs) = data.specs {
            builder = builder.bind(Json(specs));
        }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Station with id {} not found", id)))
    }

    /// Delete a station (cascade deletes its bookings)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM stations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Station with id {} not found", id)));
        }
        Ok(())
    }
}
