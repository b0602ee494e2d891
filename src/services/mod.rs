//! Business logic services

pub mod auth;
pub mod bookings;
pub mod stations;

use crate::{
    config::{AuthConfig, BookingConfig},
    error::AppResult,
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub stations: stations::StationsService,
    pub bookings: bookings::BookingsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        auth_config: AuthConfig,
        booking_config: &BookingConfig,
    ) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            stations: stations::StationsService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone(), booking_config),
            repository,
        }
    }

    /// Whether the backing store is reachable
    pub async fn ready(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
