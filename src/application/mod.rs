pub mod chart_service;
pub mod controller;
pub mod labels;
pub mod settings;

pub use chart_service::{ChartElement, ChartModel, Tooltip};
pub use controller::ChartController;
pub use settings::ChartSettings;
