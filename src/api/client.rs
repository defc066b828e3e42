//! HTTP client for the remote prediction endpoint
//!
//! Sends the derived form payload as JSON and decodes the prediction
//! label (or server-reported error) from the response body.

use super::error::ApiError;
use super::traits::PredictionApi;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Response body of the `/predict` endpoint
///
/// The server answers with exactly one of the two fields set; error
/// responses may arrive with a non-2xx status, so the body is decoded
/// without checking the status code first.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: Option<String>,
    error: Option<String>,
}

/// Client for the prediction endpoint
pub struct PredictionClient {
    client: reqwest::Client,
    url: String,
}

impl PredictionClient {
    /// Create a client for the given endpoint URL
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl PredictionApi for PredictionClient {
    async fn predict(&self, payload: Map<String, Value>) -> Result<String, ApiError> {
        let response = self.client.post(&self.url).json(&payload).send().await?;
        let body: PredictResponse = response.json().await?;
        interpret(body)
    }
}

/// Map a decoded response body onto the error taxonomy
fn interpret(body: PredictResponse) -> Result<String, ApiError> {
    if let Some(message) = body.error {
        return Err(ApiError::Application(message));
    }
    body.prediction.ok_or(ApiError::MalformedResponse)
}
