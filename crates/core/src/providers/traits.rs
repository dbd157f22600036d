use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::errors::CoreError;
use crate::models::generation::UnitGeneration;

/// An OAuth access token with its advertised lifetime in seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_in: u64,
}

/// Trait abstraction for generation data providers.
///
/// The real implementation talks to the RTE open API; tests inject mocks.
/// If the API changes, only the one implementation is touched — the token
/// caching, windowing and aggregation layers stay as they are.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Request a fresh access token using client credentials.
    async fn request_access_token(&self) -> Result<AccessToken, CoreError>;

    /// Fetch actual generation per unit for a date range.
    ///
    /// Callers are responsible for keeping the range within the API's
    /// 7-day limit; the generation service handles windowing.
    async fn actual_generations_per_unit(
        &self,
        access_token: &str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Result<Vec<UnitGeneration>, CoreError>;
}
