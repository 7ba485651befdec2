//! Core library for the `wxdash` weather dashboard.
//!
//! This crate defines:
//! - Configuration handling (on-disk config and per-request client config)
//! - The weather-lookup fetch layer (single city and concurrent batch)
//! - Shared domain models and the failure taxonomy
//!
//! It is used by `wxdash-cli`, but can also be reused by other binaries or services.

pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use batch::BatchFetcher;
pub use client::{CurrentWeather, WeatherClient};
pub use config::{ClientConfig, Config, Units};
pub use error::FetchError;
pub use model::{BatchResult, FetchOutcome, WeatherReading};
