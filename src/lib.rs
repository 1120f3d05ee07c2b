//! # Tempeste - RTE Tempo tariff calendar service
//!
//! A Rust implementation of an RTE Tempo watcher: it polls the RTE open API
//! on a fixed interval, caches the calendar of daily tariff-color
//! assignments, and exposes that cache to display surfaces.
//!
//! ## Architecture
//!
//! The application follows a modular architecture with clear separation of
//! concerns:
//!
//! - `config`: Configuration management and validation
//! - `logging`: Structured logging and tracing
//! - `rte`: RTE API integration (OAuth2 token exchange, calendar retrieval)
//! - `cache`: Atomically replaceable in-memory calendar cache
//! - `worker`: Background poll loop with graceful shutdown
//! - `sensors`: Sensor-style read-only projections
//! - `calendar`: Calendar-event read-only projection

pub mod cache;
pub mod calendar;
pub mod config;
pub mod error;
pub mod logging;
pub mod rte;
pub mod sensors;
pub mod worker;

// Re-export commonly used types
pub use cache::{TempoCache, TempoCalendar};
pub use config::Config;
pub use error::{Result, TempoError};
pub use rte::{TempoColor, TempoDay};
pub use worker::{PollWorker, WorkerHandle, WorkerState};
