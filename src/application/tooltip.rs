// Tooltip assembly - Rows shown when hovering a point of the graph
use crate::domain::metric::{find_metric, Metric, MetricType};
use crate::domain::series::TimeSeries;
use serde::Serialize;

/// One line of the hover tooltip: a metric's display label paired with its
/// formatted value at the selected index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipRow {
    pub label: String,
    pub value: String,
    pub is_custom_metric: bool,
}

/// Builds the tooltip rows for the point at `index`, one row per series in
/// input order.
///
/// Series still loading may be shorter than the others; a series without a
/// point at `index` is skipped rather than failing the whole tooltip. A
/// series whose key is absent from the catalog renders as a plain `Int`,
/// non-custom row. The caller guarantees index alignment across series;
/// nothing is re-sorted here.
pub fn assemble_tooltip(
    series: &[TimeSeries],
    index: usize,
    metrics: &[Metric],
    format_value: impl Fn(f64, MetricType) -> String,
) -> Vec<TooltipRow> {
    let mut rows = Vec::with_capacity(series.len());

    for serie in series {
        let Some(point) = serie.data.get(index) else {
            continue;
        };
        let metric = find_metric(metrics, &serie.name);
        let metric_type = metric.map(|m| m.metric_type).unwrap_or_default();
        let is_custom_metric = metric.map(|m| m.custom).unwrap_or(false);

        rows.push(TooltipRow {
            label: serie.translated_name.clone(),
            value: format_value(point.value, metric_type),
            is_custom_metric,
        });
    }

    rows
}
