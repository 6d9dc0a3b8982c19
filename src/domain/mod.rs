// Domain layer - Activity page data models
pub mod analysis;
pub mod metric;
pub mod series;
