//! TheMealDB API client
//!
//! Fetches random meal records sequentially with a fixed inter-request
//! delay (the API asks for politeness, not authentication) and per-record
//! failure accounting: a failed fetch is logged, counted and skipped,
//! never retried.

pub mod mealdb;

pub use mealdb::MealDbClient;

use async_trait::async_trait;
use mealgraph_core::record::MealRecord;
use std::time::Duration;
use thiserror::Error;

/// Default TheMealDB v1 API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.themealdb.com/api/json/v1/1";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: status {status}")]
    Api { status: u16 },

    #[error("response contained no meal record")]
    EmptyPayload,
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Source of meal records.
///
/// The pipeline only needs "give me one random record"; keeping that
/// behind a trait lets tests drive the fetch loop with canned records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch one random meal record.
    async fn fetch_random(&self) -> ClientResult<MealRecord>;
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub fetch_delay_ms: u64,
}

impl ClientConfig {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            timeout_seconds: 30,
            fetch_delay_ms: 500,
        }
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_fetch_delay(mut self, millis: u64) -> Self {
        self.fetch_delay_ms = millis;
        self
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// Outcome of a batch fetch: the records that arrived plus the count of
/// per-record failures. Fewer meals than requested is an accepted,
/// non-fatal outcome.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub meals: Vec<MealRecord>,
    pub failures: usize,
}

/// Fetch `count` random meals sequentially, sleeping `delay` between
/// attempts to respect the upstream rate limit.
pub async fn fetch_random_meals(
    source: &dyn RecordSource,
    count: usize,
    delay: Duration,
) -> FetchReport {
    let mut report = FetchReport::default();
    for attempt in 1..=count {
        match source.fetch_random().await {
            Ok(meal) => {
                tracing::info!(
                    "fetched {} ({}/{})",
                    meal.name().unwrap_or("<unnamed>"),
                    attempt,
                    count
                );
                report.meals.push(meal);
            }
            Err(error) => {
                tracing::warn!("error fetching meal {}/{}, skipping: {}", attempt, count, error);
                report.failures += 1;
            }
        }
        if attempt < count {
            tokio::time::sleep(delay).await;
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct CannedSource {
        responses: Mutex<Vec<ClientResult<MealRecord>>>,
    }

    impl CannedSource {
        fn new(responses: Vec<ClientResult<MealRecord>>) -> Self {
            Self {
                responses: Mutex::new(responses),
            }
        }
    }

    #[async_trait]
    impl RecordSource for CannedSource {
        async fn fetch_random(&self) -> ClientResult<MealRecord> {
            self.responses
                .lock()
                .unwrap()
                .remove(0)
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.fetch_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("https://api.example.org/v1/")
            .with_timeout(5)
            .with_fetch_delay(10);
        assert_eq!(config.endpoint, "https://api.example.org/v1");
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.fetch_delay_ms, 10);
    }

    #[tokio::test]
    async fn test_fetch_loop_counts_failures_and_continues() {
        let source = CannedSource::new(vec![
            Ok(MealRecord::new("1").with_name("First")),
            Err(ClientError::Api { status: 500 }),
            Ok(MealRecord::new("2").with_name("Second")),
        ]);

        let report = fetch_random_meals(&source, 3, Duration::from_millis(0)).await;

        assert_eq!(report.meals.len(), 2);
        assert_eq!(report.failures, 1);
        assert_eq!(report.meals[0].name(), Some("First"));
        assert_eq!(report.meals[1].name(), Some("Second"));
    }

    #[tokio::test]
    async fn test_fetch_loop_all_failures_is_not_fatal() {
        let source = CannedSource::new(vec![
            Err(ClientError::EmptyPayload),
            Err(ClientError::Api { status: 429 }),
        ]);

        let report = fetch_random_meals(&source, 2, Duration::from_millis(0)).await;

        assert!(report.meals.is_empty());
        assert_eq!(report.failures, 2);
    }
}
