//! Data models for stations, bookings and users

pub mod booking;
pub mod station;
pub mod user;
