// Application layer - Use cases behind the activity page
pub mod graph_service;
pub mod history;
pub mod metric_type;
pub mod tooltip;
