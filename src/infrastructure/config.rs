// Graph preset configuration
use serde::Deserialize;

/// A named graph preset and the fixed, ordered metric keys it plots.
#[derive(Debug, Deserialize, Clone)]
pub struct GraphPreset {
    pub id: String,
    pub metrics: Vec<String>,
}

/// The table of graph presets. The "custom" graph is not a preset; its
/// displayed metrics come from the query instead.
#[derive(Debug, Deserialize, Clone)]
pub struct GraphsConfig {
    #[serde(default)]
    pub graphs: Vec<GraphPreset>,
}

impl GraphsConfig {
    /// Ordered metric keys of a preset, `None` for unknown graph ids.
    pub fn preset(&self, graph: &str) -> Option<&[String]> {
        self.graphs
            .iter()
            .find(|preset| preset.id == graph)
            .map(|preset| preset.metrics.as_slice())
    }
}

impl Default for GraphsConfig {
    /// Built-in presets, matching what the activity page has always plotted.
    fn default() -> Self {
        let preset = |id: &str, metrics: &[&str]| GraphPreset {
            id: id.to_string(),
            metrics: metrics.iter().map(ToString::to_string).collect(),
        };
        Self {
            graphs: vec![
                preset("overview", &["bugs", "code_smells", "vulnerabilities"]),
                preset("coverage", &["uncovered_lines", "lines_to_cover"]),
                preset("duplications", &["duplicated_lines", "ncloc"]),
            ],
        }
    }
}

/// Loads the preset table from `config/graphs.{toml,json,...}`, falling back
/// to the built-in presets when no config file is deployed.
pub fn load_graphs_config() -> anyhow::Result<GraphsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/graphs").required(false))
        .build()?;

    let loaded: GraphsConfig = settings.try_deserialize()?;
    if loaded.graphs.is_empty() {
        tracing::debug!("no graph presets configured, using built-in table");
        return Ok(GraphsConfig::default());
    }
    Ok(loaded)
}
