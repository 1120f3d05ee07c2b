//! Bearer-authenticated retrieval of the Tempo tariff calendar

use chrono::{DateTime, Utc};

use crate::config::ApiConfig;
use crate::error::{Result, TempoError};
use crate::logging::get_logger;
use crate::rte::auth::AccessToken;
use crate::rte::types::{TempoColor, TempoDay};

/// Client for the Tempo calendar endpoint
pub struct TempoApiClient {
    tempo_url: String,
    http: reqwest::Client,
    logger: crate::logging::StructuredLogger,
}

impl TempoApiClient {
    /// Create a new API client from API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            tempo_url: config.tempo_url.clone(),
            http,
            logger: get_logger("rte"),
        })
    }

    /// Fetch and parse the full Tempo calendar
    pub async fn fetch_tempo_days(&self, token: &AccessToken) -> Result<Vec<TempoDay>> {
        self.logger.debug("Fetching tempo days");

        let resp = self
            .http
            .get(&self.tempo_url)
            .bearer_auth(token.as_str())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TempoError::api(format!(
                "Tempo endpoint returned {}",
                status
            )));
        }

        let body: serde_json::Value = resp.json().await?;
        parse_tempo_days(&body, Utc::now())
    }
}

/// Parse the `tempo_days` array of an API response into domain records.
/// `updated` is stamped on every record of the batch.
pub fn parse_tempo_days(body: &serde_json::Value, updated: DateTime<Utc>) -> Result<Vec<TempoDay>> {
    let entries = body
        .get("tempo_days")
        .and_then(|v| v.as_array())
        .ok_or_else(|| TempoError::parse("Response missing tempo_days array"))?;

    let mut days = Vec::with_capacity(entries.len());
    for entry in entries {
        let start = entry
            .get("start_date")
            .and_then(|v| v.as_str())
            .ok_or_else(|| TempoError::parse("Tempo day missing start_date"))?;
        let end = entry
            .get("end_date")
            .and_then(|v| v.as_str())
            .ok_or_else(|| TempoError::parse("Tempo day missing end_date"))?;
        let value = entry
            .get("value")
            .and_then(|v| v.as_str())
            .ok_or_else(|| TempoError::parse("Tempo day missing value"))?;

        let color = TempoColor::from_label(value)
            .ok_or_else(|| TempoError::parse(format!("Unknown tempo color: {}", value)))?;

        days.push(TempoDay {
            start: DateTime::parse_from_rfc3339(start)?,
            end: DateTime::parse_from_rfc3339(end)?,
            color,
            updated,
        });
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_tempo_days() {
        let body = json!({
            "tempo_days": [
                {
                    "start_date": "2026-01-05T00:00:00+01:00",
                    "end_date": "2026-01-06T00:00:00+01:00",
                    "value": "RED"
                },
                {
                    "start_date": "2026-01-06T00:00:00+01:00",
                    "end_date": "2026-01-07T00:00:00+01:00",
                    "value": "WHITE"
                }
            ]
        });

        let now = Utc::now();
        let days = parse_tempo_days(&body, now).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].color, TempoColor::Red);
        assert_eq!(days[1].color, TempoColor::White);
        assert_eq!(days[0].start.to_rfc3339(), "2026-01-05T00:00:00+01:00");
        assert_eq!(days[0].updated, now);
    }

    #[test]
    fn test_parse_preserves_response_order() {
        // The API order is kept verbatim, even when not chronological
        let body = json!({
            "tempo_days": [
                {
                    "start_date": "2026-01-07T00:00:00+01:00",
                    "end_date": "2026-01-08T00:00:00+01:00",
                    "value": "BLUE"
                },
                {
                    "start_date": "2026-01-05T00:00:00+01:00",
                    "end_date": "2026-01-06T00:00:00+01:00",
                    "value": "RED"
                }
            ]
        });

        let days = parse_tempo_days(&body, Utc::now()).unwrap();
        assert_eq!(days[0].color, TempoColor::Blue);
        assert_eq!(days[1].color, TempoColor::Red);
    }

    #[test]
    fn test_parse_rejects_missing_array() {
        let body = json!({ "unexpected": [] });
        let err = parse_tempo_days(&body, Utc::now()).unwrap_err();
        assert!(matches!(err, TempoError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_color() {
        let body = json!({
            "tempo_days": [
                {
                    "start_date": "2026-01-05T00:00:00+01:00",
                    "end_date": "2026-01-06T00:00:00+01:00",
                    "value": "GREEN"
                }
            ]
        });
        let err = parse_tempo_days(&body, Utc::now()).unwrap_err();
        assert!(matches!(err, TempoError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_timestamp() {
        let body = json!({
            "tempo_days": [
                {
                    "start_date": "05/01/2026",
                    "end_date": "2026-01-06T00:00:00+01:00",
                    "value": "BLUE"
                }
            ]
        });
        let err = parse_tempo_days(&body, Utc::now()).unwrap_err();
        assert!(matches!(err, TempoError::Parse { .. }));
    }
}
