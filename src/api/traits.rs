//! Trait abstraction for the prediction client to enable mocking in tests

use super::error::ApiError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Trait for prediction API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Submit a payload and return the prediction label
    async fn predict(&self, payload: Map<String, Value>) -> Result<String, ApiError>;
}
