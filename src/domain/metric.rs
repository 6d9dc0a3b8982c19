// Metric catalog domain models
use serde::{Deserialize, Serialize};

/// Value kind of a metric, governing how raw numbers are formatted for
/// display. Serialized in the upstream spelling (`"INT"`, `"WORK_DUR"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricType {
    #[default]
    Int,
    ShortInt,
    Float,
    Percent,
    Bool,
    Millisec,
    Level,
    Rating,
    WorkDur,
    Data,
}

impl MetricType {
    /// Maps an upstream type string to a `MetricType`, defaulting to `Int`
    /// for anything unrecognized.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "INT" => Self::Int,
            "SHORT_INT" => Self::ShortInt,
            "FLOAT" => Self::Float,
            "PERCENT" => Self::Percent,
            "BOOL" => Self::Bool,
            "MILLISEC" => Self::Millisec,
            "LEVEL" => Self::Level,
            "RATING" => Self::Rating,
            "WORK_DUR" => Self::WorkDur,
            "DATA" => Self::Data,
            _ => Self::Int,
        }
    }
}

/// One entry of the metric catalog, owned by the external data layer and
/// passed in as a read-only snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    /// User-defined rather than built-in; affects display styling only.
    #[serde(default)]
    pub custom: bool,
}

impl Metric {
    pub fn new(key: String, name: String, metric_type: MetricType) -> Self {
        Self {
            key,
            name,
            metric_type,
            custom: false,
        }
    }

    pub fn new_custom(key: String, name: String, metric_type: MetricType) -> Self {
        Self {
            custom: true,
            ..Self::new(key, name, metric_type)
        }
    }
}

/// Linear catalog lookup by exact key. The catalog is small (a few dozen
/// entries per page load); a map would not change observable behavior.
pub fn find_metric<'a>(metrics: &'a [Metric], key: &str) -> Option<&'a Metric> {
    metrics.iter().find(|metric| metric.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(MetricType::parse("PERCENT"), MetricType::Percent);
        assert_eq!(MetricType::parse("WORK_DUR"), MetricType::WorkDur);
        assert_eq!(MetricType::parse("RATING"), MetricType::Rating);
    }

    #[test]
    fn test_parse_unknown_type_defaults_to_int() {
        assert_eq!(MetricType::parse("DISTRIB"), MetricType::Int);
        assert_eq!(MetricType::parse(""), MetricType::Int);
    }

    #[test]
    fn test_deserialize_catalog_entry() {
        let metric: Metric =
            serde_json::from_str(r#"{"key":"bugs","name":"Bugs","type":"INT"}"#).unwrap();
        assert_eq!(metric.key, "bugs");
        assert_eq!(metric.metric_type, MetricType::Int);
        assert!(!metric.custom);

        let metric: Metric = serde_json::from_str(
            r#"{"key":"team_size","name":"Team size","type":"INT","custom":true}"#,
        )
        .unwrap();
        assert!(metric.custom);
    }

    #[test]
    fn test_find_metric() {
        let metrics = vec![
            Metric::new("bugs".to_string(), "Bugs".to_string(), MetricType::Int),
            Metric::new(
                "coverage".to_string(),
                "Coverage".to_string(),
                MetricType::Percent,
            ),
        ];
        assert_eq!(
            find_metric(&metrics, "coverage").map(|m| m.metric_type),
            Some(MetricType::Percent)
        );
        assert!(find_metric(&metrics, "ncloc").is_none());
    }
}
