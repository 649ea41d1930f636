//! TheMealDB HTTP implementation

use crate::{ClientConfig, ClientError, ClientResult, RecordSource};
use async_trait::async_trait;
use mealgraph_core::record::MealRecord;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Response envelope for the random-meal endpoint.
#[derive(Deserialize)]
struct RandomMealResponse {
    meals: Option<Vec<MealRecord>>,
}

/// TheMealDB API client
pub struct MealDbClient {
    config: ClientConfig,
    client: Client,
}

impl MealDbClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

#[async_trait]
impl RecordSource for MealDbClient {
    async fn fetch_random(&self) -> ClientResult<MealRecord> {
        let url = format!("{}/random.php", self.config.endpoint);
        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Api {
                status: response.status().as_u16(),
            });
        }

        let payload: RandomMealResponse = response.json().await?;
        payload
            .meals
            .into_iter()
            .flatten()
            .next()
            .ok_or(ClientError::EmptyPayload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_meal() {
        let payload: RandomMealResponse = serde_json::from_str(
            r#"{"meals": [{"idMeal": "52874", "strMeal": "Beef Stew", "strIngredient1": "Beef"}]}"#,
        )
        .unwrap();

        let meal = payload.meals.unwrap().remove(0);
        assert_eq!(meal.id(), Some("52874"));
        assert_eq!(meal.name(), Some("Beef Stew"));
        assert_eq!(meal.ingredient(1), Some("Beef"));
    }

    #[test]
    fn test_envelope_without_meals() {
        let payload: RandomMealResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(payload.meals.is_none());
    }

    #[test]
    fn test_client_keeps_config() {
        let client = MealDbClient::new(ClientConfig::new("https://api.example.org").with_timeout(3));
        assert_eq!(client.config().endpoint, "https://api.example.org");
        assert_eq!(client.config().timeout_seconds, 3);
    }
}
