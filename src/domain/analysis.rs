// Analysis feed and activity query domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event attached to an analysis (version bump, quality gate change,
/// user-defined marker, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub key: String,
    pub category: String,
    pub name: String,
}

impl Event {
    pub fn new(key: String, category: String, name: String) -> Self {
        Self {
            key,
            category,
            name,
        }
    }
}

/// One analysis of the project, with its attached events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub key: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Analysis {
    pub fn new(key: String, date: DateTime<Utc>, events: Vec<Event>) -> Self {
        Self { key, date, events }
    }
}

/// User-controlled query state of the activity page: which graph is shown,
/// which custom metrics it plots, and how the history is narrowed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphQuery {
    pub graph: String,
    #[serde(default)]
    pub custom_metrics: Vec<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub category: Option<String>,
}

impl GraphQuery {
    pub fn new(graph: impl Into<String>) -> Self {
        Self {
            graph: graph.into(),
            ..Self::default()
        }
    }

    pub fn with_custom_metrics(graph: impl Into<String>, custom_metrics: Vec<String>) -> Self {
        Self {
            graph: graph.into(),
            custom_metrics,
            ..Self::default()
        }
    }
}
