// Project activity graph data layer.
//
// The UI container owns fetching, routing and rendering; this crate owns the
// transforms in between: which metric type governs axis formatting for the
// selected graph, which rows a tooltip shows at a selected time index, and
// how the measure history is narrowed by the activity query.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::graph_service::GraphService;
pub use application::metric_type::{displayed_history_metrics, resolve_metric_type};
pub use application::tooltip::{assemble_tooltip, TooltipRow};
pub use domain::metric::{Metric, MetricType};
pub use domain::series::{DataPoint, TimeSeries};
