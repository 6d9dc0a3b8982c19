// Metric catalog adapter - Loads the catalog snapshot exported by the data layer
use crate::domain::metric::Metric;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("metric catalog is empty")]
    Empty,
    #[error("duplicate metric key '{0}' in catalog")]
    DuplicateKey(String),
}

/// Parses a catalog snapshot from its JSON export, a plain array of metric
/// entries. Keys must be unique: the transforms resolve series by exact key
/// match, so a duplicate would make lookups position-dependent.
pub fn parse_catalog(json: &str) -> anyhow::Result<Vec<Metric>> {
    let metrics: Vec<Metric> = serde_json::from_str(json)?;
    if metrics.is_empty() {
        return Err(CatalogError::Empty.into());
    }

    let mut seen = HashSet::new();
    for metric in &metrics {
        if !seen.insert(metric.key.as_str()) {
            return Err(CatalogError::DuplicateKey(metric.key.clone()).into());
        }
    }

    tracing::debug!("loaded metric catalog with {} entries", metrics.len());
    Ok(metrics)
}

/// Reads and parses a catalog snapshot file.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<Metric>> {
    let json = std::fs::read_to_string(path)?;
    parse_catalog(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metric::MetricType;

    #[test]
    fn test_parse_catalog() {
        let metrics = parse_catalog(
            r#"[
                {"key": "bugs", "name": "Bugs", "type": "INT"},
                {"key": "coverage", "name": "Coverage", "type": "PERCENT"},
                {"key": "team_size", "name": "Team size", "type": "INT", "custom": true}
            ]"#,
        )
        .unwrap();
        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics[1].metric_type, MetricType::Percent);
        assert!(metrics[2].custom);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = parse_catalog("[]").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = parse_catalog(
            r#"[
                {"key": "bugs", "name": "Bugs", "type": "INT"},
                {"key": "bugs", "name": "Bugs again", "type": "FLOAT"}
            ]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate metric key 'bugs'"));
    }
}
