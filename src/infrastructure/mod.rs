// Infrastructure layer - Configuration and data-layer adapters
pub mod catalog;
pub mod config;
