//! GameDock Gaming Station Booking System
//!
//! A Rust implementation of the GameDock booking server, providing a REST
//! JSON API for reserving gaming stations, resolving slot availability and
//! tracking each booking through its lifecycle.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod scheduling;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
