use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One input record for the cumulative chart: a label and an hourly
/// average value.
///
/// This is the payload shape the frontend embeds in the page. Order of a
/// `Vec<DataPoint>` is significant and preserved through every transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub start_date: String,
    pub average_per_hour: f64,
}

impl DataPoint {
    pub fn new(start_date: impl Into<String>, average_per_hour: f64) -> Self {
        Self {
            start_date: start_date.into(),
            average_per_hour,
        }
    }

    /// Parse a serialized array-of-objects payload into data points.
    ///
    /// This is a schema-validated parse: a payload that is not a JSON array,
    /// or any record missing `start_date` or `average_per_hour`, rejects the
    /// whole payload with `CoreError::Deserialization`. Partial payloads are
    /// never silently accepted.
    pub fn parse_payload(payload: &str) -> Result<Vec<DataPoint>, CoreError> {
        let points: Vec<DataPoint> = serde_json::from_str(payload)?;
        Ok(points)
    }
}
