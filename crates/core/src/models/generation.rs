use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Production type marker used by the API for nuclear units.
pub const NUCLEAR: &str = "NUCLEAR";

// ── Wire types (RTE API response shapes) ────────────────────────────

/// Top-level envelope of the actual-generations-per-unit endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationsEnvelope {
    #[serde(default)]
    pub actual_generations_per_unit: Vec<UnitGeneration>,
}

/// Generation data for one production unit over one reporting window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitGeneration {
    pub start_date: DateTime<FixedOffset>,
    pub end_date: DateTime<FixedOffset>,
    pub unit: Unit,
    pub values: Vec<GenerationValue>,
}

/// Identity of a production unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub eic_code: String,
    pub name: String,
    pub production_type: String,
}

/// One measured value inside a unit's reporting window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationValue {
    pub start_date: DateTime<FixedOffset>,
    pub end_date: DateTime<FixedOffset>,
    pub updated_date: DateTime<FixedOffset>,
    pub value: f64,
}

// ── Flattened record ────────────────────────────────────────────────

/// One unit/value pair flattened out of the nested API response.
///
/// The aggregation service produces these — one record per measured value,
/// carrying the owning unit's identity alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub unit_eic_code: String,
    pub unit_name: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub updated: DateTime<FixedOffset>,
    pub value: f64,
}
