// Measure history domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One measurement of a metric at an analysis date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl DataPoint {
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }
}

/// The graphed history of one metric. `name` is the metric key; the points
/// are ordered by time ascending and index-aligned with the other series of
/// the same graph (the data layer materializes one point per analysis).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeries {
    pub name: String,
    pub translated_name: String,
    pub data: Vec<DataPoint>,
}

impl TimeSeries {
    pub fn new(name: String, translated_name: String, data: Vec<DataPoint>) -> Self {
        Self {
            name,
            translated_name,
            data,
        }
    }
}
