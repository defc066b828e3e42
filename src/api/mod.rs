//! Client module for the prediction endpoint

mod client;
mod error;
mod traits;

pub use client::PredictionClient;
pub use error::ApiError;
pub use traits::PredictionApi;

#[cfg(test)]
pub use traits::MockPredictionApi;
