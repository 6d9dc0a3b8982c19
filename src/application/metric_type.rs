// Metric type resolution - Which value kind governs axis formatting
use crate::domain::metric::{find_metric, Metric, MetricType};
use crate::infrastructure::config::GraphsConfig;

/// Graph id whose displayed metrics come from the query instead of a preset.
pub const CUSTOM_GRAPH: &str = "custom";

pub fn is_custom_graph(graph: &str) -> bool {
    graph == CUSTOM_GRAPH
}

/// Ordered metric keys actually displayed for a graph: the custom graph
/// shows the query's selection verbatim, a preset shows its fixed list, and
/// an unknown graph id shows nothing.
pub fn displayed_history_metrics<'a>(
    graph: &str,
    custom_metrics: &'a [String],
    presets: &'a GraphsConfig,
) -> &'a [String] {
    if is_custom_graph(graph) {
        custom_metrics
    } else {
        presets.preset(graph).unwrap_or(&[])
    }
}

/// The metric type governing value formatting for the displayed graph.
///
/// A graph renders a single numeric scale, so only the first displayed
/// metric's type is consulted; reordering the custom selection can change
/// the result. An empty selection or a key absent from the catalog degrades
/// to `Int`, never to an error.
pub fn resolve_metric_type(
    graph: &str,
    custom_metrics: &[String],
    presets: &GraphsConfig,
    metrics: &[Metric],
) -> MetricType {
    let displayed = displayed_history_metrics(graph, custom_metrics, presets);
    let metric_key = displayed.first().map(String::as_str).unwrap_or("");
    find_metric(metrics, metric_key)
        .map(|metric| metric.metric_type)
        .unwrap_or_default()
}
