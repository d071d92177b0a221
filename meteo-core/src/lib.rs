//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - Request model and basic-auth credentials
//! - The Meteomatics provider (URL construction, the single GET, error mapping)
//! - Extraction of the nested JSON response into per-parameter time series
//!
//! It never prints; presentation lives in `meteo-cli`.

pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use auth::Credentials;
pub use config::ClientConfig;
pub use error::FetchError;
pub use model::{
    ApiResponse, ParameterKind, Reading, Series, WeatherRequest, WeatherSeries, collect_series,
};
pub use provider::{
    WeatherProvider, fetch, fetch_blocking, fetch_blocking_with, meteomatics::MeteomaticsProvider,
};
