//! Station management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::station::{CreateStation, Station, StationType, UpdateStation},
    repository::Repository,
};

#[derive(Clone)]
pub struct StationsService {
    repository: Repository,
}

impl StationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all stations
    pub async fn list(&self) -> AppResult<Vec<Station>> {
        self.repository.stations.list().await
    }

    /// Get a station by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Station> {
        self.repository.stations.get_by_id(id).await
    }

    /// Create a station
    pub async fn create(&self, data: &CreateStation) -> AppResult<Station> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if data.specs.is_some() && data.station_type != StationType::PcGaming {
            return Err(AppError::Validation(
                "Only PC Gaming stations carry hardware specs".to_string(),
            ));
        }

        self.repository.stations.create(data).await
    }

    /// Update a station
    pub async fn update(&self, id: i32, data: &UpdateStation) -> AppResult<Station> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if data.specs.is_some() {
            let effective_type = match data.station_type {
                Some(station_type) => station_type,
                None => self.repository.stations.get_by_id(id).await?.station_type,
            };
            if effective_type != StationType::PcGaming {
                return Err(AppError::Validation(
                    "Only PC Gaming stations carry hardware specs".to_string(),
                ));
            }
        }

        self.repository.stations.update(id, data).await
    }

    /// Delete a station
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.stations.delete(id).await
    }
}
