pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;

use errors::CoreError;
use models::{
    chart::{ChartConfig, CumulativeSeries},
    datapoint::DataPoint,
    generation::GenerationRecord,
    settings::ApiCredentials,
};
use providers::rte::RteProvider;
use providers::traits::GenerationProvider;
use services::{
    aggregation_service::AggregationService, chart_service::ChartService,
    generation_service::GenerationService,
};

/// Main entry point for the Production Dashboard core library.
///
/// Owns the data provider and all services needed to turn raw API responses
/// into chart-ready output. The hosting frontend calls in once its rendering
/// surface is ready; everything here is synchronous computation except the
/// API fetch itself.
#[must_use]
pub struct ProductionDashboard {
    generation_service: GenerationService,
    aggregation_service: AggregationService,
    chart_service: ChartService,
}

impl std::fmt::Debug for ProductionDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductionDashboard")
            .field("provider", &self.generation_service.provider_name())
            .finish()
    }
}

impl ProductionDashboard {
    /// Create a dashboard backed by the RTE open API.
    pub fn new(credentials: ApiCredentials) -> Self {
        Self::with_provider(Box::new(RteProvider::new(credentials)))
    }

    /// Create a dashboard backed by an arbitrary provider.
    /// This is how tests inject mock providers.
    pub fn with_provider(provider: Box<dyn GenerationProvider>) -> Self {
        Self {
            generation_service: GenerationService::new(provider),
            aggregation_service: AggregationService::new(),
            chart_service: ChartService::new(),
        }
    }

    // ── Data Fetching ───────────────────────────────────────────────

    /// Fetch actual nuclear generation over a date range as flat records.
    ///
    /// Handles token caching and splits ranges longer than the API's 7-day
    /// cap into multiple requests. Non-nuclear units are dropped.
    pub async fn fetch_generation(
        &mut self,
        from: DateTime<FixedOffset>,
        to: DateTime<FixedOffset>,
    ) -> Result<Vec<GenerationRecord>, CoreError> {
        let generations = self.generation_service.fetch_range(from, to).await?;
        Ok(self.aggregation_service.flatten(&generations))
    }

    // ── Aggregation ─────────────────────────────────────────────────

    /// Average generation value per hour of day, labelled "Hour 00".."Hour 23".
    #[must_use]
    pub fn average_per_hour(&self, records: &[GenerationRecord]) -> Vec<DataPoint> {
        self.aggregation_service.average_per_hour(records)
    }

    /// Total generation value per hour of each day.
    #[must_use]
    pub fn sum_per_hour_of_day(
        &self,
        records: &[GenerationRecord],
    ) -> BTreeMap<String, BTreeMap<String, f64>> {
        self.aggregation_service.sum_per_hour_of_day(records)
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Parse a serialized data-point payload, rejecting malformed records
    /// with an explicit error.
    pub fn parse_data_points(&self, payload: &str) -> Result<Vec<DataPoint>, CoreError> {
        DataPoint::parse_payload(payload)
    }

    /// Derive the cumulative series from ordered data points.
    #[must_use]
    pub fn cumulative_series(&self, points: &[DataPoint]) -> CumulativeSeries {
        self.chart_service.cumulative_series(points)
    }

    /// Build the full bar-chart configuration for ordered data points.
    #[must_use]
    pub fn cumulative_chart(&self, points: &[DataPoint]) -> ChartConfig {
        let series = self.chart_service.cumulative_series(points);
        self.chart_service.bar_config(&series)
    }

    /// Serialize a chart configuration for embedding in a page.
    pub fn chart_to_json(&self, config: &ChartConfig) -> Result<String, CoreError> {
        serde_json::to_string(config)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize chart config: {e}")))
    }
}
