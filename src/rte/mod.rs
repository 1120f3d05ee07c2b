//! RTE Tempo open API integration
//!
//! Token acquisition and tariff calendar retrieval are split across smaller
//! files; this module re-exports the public surface.

pub mod auth;
pub mod client;
pub mod types;

pub use auth::{AccessToken, Credentials, TokenProvider};
pub use client::TempoApiClient;
pub use types::{TempoColor, TempoDay};

/// Production OAuth2 token endpoint
pub const API_TOKEN_ENDPOINT: &str = "https://digital.iservices.rte-france.com/token/oauth/";

/// Production Tempo calendar endpoint
pub const API_TEMPO_ENDPOINT: &str =
    "https://digital.iservices.rte-france.com/open_api/tempo_like_supply_contract/v1/tempo_days";
