// Graph service - Use case for feeding the activity graphs
use crate::application::history::{filter_analyses, filter_series};
use crate::application::metric_type::resolve_metric_type;
use crate::application::tooltip::{assemble_tooltip, TooltipRow};
use crate::domain::analysis::{Analysis, GraphQuery};
use crate::domain::metric::{find_metric, Metric, MetricType};
use crate::domain::series::TimeSeries;
use crate::infrastructure::config::GraphsConfig;

/// Per-page-load facade over the pure transforms: constructed from the
/// preset table and the metric-catalog snapshot, then queried on every
/// render or hover. Holds no other state.
#[derive(Clone)]
pub struct GraphService {
    presets: GraphsConfig,
    metrics: Vec<Metric>,
}

impl GraphService {
    pub fn new(presets: GraphsConfig, metrics: Vec<Metric>) -> Self {
        Self { presets, metrics }
    }

    pub fn with_default_presets(metrics: Vec<Metric>) -> Self {
        Self::new(GraphsConfig::default(), metrics)
    }

    /// The metric type governing axis formatting for the queried graph.
    pub fn metric_type(&self, query: &GraphQuery) -> MetricType {
        let resolved = resolve_metric_type(
            &query.graph,
            &query.custom_metrics,
            &self.presets,
            &self.metrics,
        );
        tracing::debug!(graph = %query.graph, metric_type = ?resolved, "resolved graph metric type");
        resolved
    }

    /// Tooltip rows for the hovered index, one per graphed series.
    pub fn tooltip(
        &self,
        series: &[TimeSeries],
        index: usize,
        format_value: impl Fn(f64, MetricType) -> String,
    ) -> Vec<TooltipRow> {
        for serie in series {
            if find_metric(&self.metrics, &serie.name).is_none() {
                // Degrades to Int/non-custom; logged so a newly introduced
                // metric missing from the catalog export stays visible.
                tracing::debug!(key = %serie.name, "graphed series has no catalog entry");
            }
        }
        assemble_tooltip(series, index, &self.metrics, format_value)
    }

    /// The measure history narrowed to the query's date range.
    pub fn graphed_series(&self, series: &[TimeSeries], query: &GraphQuery) -> Vec<TimeSeries> {
        filter_series(series, query)
    }

    /// The analyses feed narrowed by date range and event category.
    pub fn visible_analyses(&self, analyses: &[Analysis], query: &GraphQuery) -> Vec<Analysis> {
        filter_analyses(analyses, query)
    }
}
