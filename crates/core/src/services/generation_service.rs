use chrono::{DateTime, Duration, FixedOffset, Utc};
use tracing::debug;

use crate::errors::CoreError;
use crate::models::generation::UnitGeneration;
use crate::providers::traits::GenerationProvider;

/// Maximum date range the generation API accepts in one request.
const MAX_WINDOW_DAYS: i64 = 7;

/// Tokens within this margin of expiry are treated as expired, so a token
/// never dies mid-request.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Cached OAuth access token with its absolute expiry time.
///
/// The token endpoint advertises a lifetime (`expires_in`, seconds); the
/// cache converts it to a UTC deadline at store time so validity checks are
/// a single comparison.
#[derive(Debug, Default)]
pub struct TokenCache {
    token: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached token if it is still valid at `now`.
    pub fn get(&self, now: DateTime<Utc>) -> Option<&str> {
        let expires_at = self.expires_at?;
        if now + Duration::seconds(EXPIRY_MARGIN_SECS) < expires_at {
            self.token.as_deref()
        } else {
            None
        }
    }

    /// Store a freshly issued token valid for `expires_in` seconds from `now`.
    pub fn store(&mut self, token: String, expires_in: u64, now: DateTime<Utc>) {
        self.expires_at = Some(now + Duration::seconds(expires_in as i64));
        self.token = Some(token);
    }

    /// Drop the cached token (e.g. after the API rejects it).
    pub fn clear(&mut self) {
        self.token = None;
        self.expires_at = None;
    }
}

/// Fetches actual generation data through a provider, reusing access tokens
/// and splitting long date ranges into API-sized windows.
pub struct GenerationService {
    provider: Box<dyn GenerationProvider>,
    token_cache: TokenCache,
}

impl GenerationService {
    pub fn new(provider: Box<dyn GenerationProvider>) -> Self {
        Self {
            provider,
            token_cache: TokenCache::new(),
        }
    }

    /// Name of the underlying provider (for logs/errors).
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Get a valid access token, requesting a new one only when the cached
    /// token is absent or about to expire.
    pub async fn access_token(&mut self) -> Result<String, CoreError> {
        let now = Utc::now();
        if let Some(token) = self.token_cache.get(now) {
            debug!("reusing cached access token");
            return Ok(token.to_string());
        }

        let issued = self.provider.request_access_token().await?;
        self.token_cache
            .store(issued.access_token.clone(), issued.expires_in, now);
        Ok(issued.access_token)
    }

    /// Fetch actual generation per unit over `[from, to]`.
    ///
    /// Ranges longer than the API's 7-day cap are split into consecutive,
    /// non-overlapping windows and the results concatenated in order.
    pub async fn fetch_range(
        &mut self,
        from: DateTime<FixedOffset>,
        to: DateTime<FixedOffset>,
    ) -> Result<Vec<UnitGeneration>, CoreError> {
        if from > to {
            return Err(CoreError::ValidationError(format!(
                "'from' date ({from}) must not be after 'to' date ({to})"
            )));
        }

        let token = self.access_token().await?;

        // Short ranges (including a zero-length one) go out as a single request.
        if to - from <= Duration::days(MAX_WINDOW_DAYS) {
            return self
                .provider
                .actual_generations_per_unit(&token, from, to)
                .await;
        }

        let mut generations = Vec::new();
        let mut window_start = from;

        while window_start < to {
            let window_end = std::cmp::min(window_start + Duration::days(MAX_WINDOW_DAYS), to);

            let mut batch = self
                .provider
                .actual_generations_per_unit(&token, window_start, window_end)
                .await?;
            generations.append(&mut batch);

            window_start = window_end;
        }

        debug!(
            units = generations.len(),
            "fetched actual generation data"
        );
        Ok(generations)
    }
}
