use chrono::Timelike;
use std::collections::BTreeMap;

use crate::models::datapoint::DataPoint;
use crate::models::generation::{GenerationRecord, UnitGeneration, NUCLEAR};

/// Turns nested per-unit API responses into flat records and hourly
/// aggregates.
///
/// All methods are pure: same input, same output, no state.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Flatten nested unit generations into one record per measured value,
    /// keeping only nuclear units.
    pub fn flatten(&self, generations: &[UnitGeneration]) -> Vec<GenerationRecord> {
        generations
            .iter()
            .filter(|g| g.unit.production_type == NUCLEAR)
            .flat_map(|g| {
                g.values.iter().map(|v| GenerationRecord {
                    unit_eic_code: g.unit.eic_code.clone(),
                    unit_name: g.unit.name.clone(),
                    start: v.start_date,
                    end: v.end_date,
                    updated: v.updated_date,
                    value: v.value,
                })
            })
            .collect()
    }

    /// Average generation value per hour of day, across all records.
    ///
    /// Returns one data point per hour that appears in the input, labelled
    /// `"Hour 00"` through `"Hour 23"`, in ascending hour order. The output
    /// feeds the cumulative chart transform directly.
    pub fn average_per_hour(&self, records: &[GenerationRecord]) -> Vec<DataPoint> {
        let mut sums: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
        for record in records {
            let entry = sums.entry(record.start.hour()).or_insert((0.0, 0));
            entry.0 += record.value;
            entry.1 += 1;
        }

        sums.into_iter()
            .map(|(hour, (sum, count))| {
                DataPoint::new(format!("Hour {hour:02}"), sum / count as f64)
            })
            .collect()
    }

    /// Total generation value per hour of each day.
    ///
    /// Outer key: day as `YYYY-MM-DD`; inner key: `"Hour NN"` label.
    /// Both levels iterate in ascending order.
    pub fn sum_per_hour_of_day(
        &self,
        records: &[GenerationRecord],
    ) -> BTreeMap<String, BTreeMap<String, f64>> {
        let mut days: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        for record in records {
            let day = record.start.format("%Y-%m-%d").to_string();
            let hour = format!("Hour {:02}", record.start.hour());
            *days.entry(day).or_default().entry(hour).or_insert(0.0) += record.value;
        }
        days
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
