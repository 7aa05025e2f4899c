pub mod chart_renderer;
pub mod geometry;
pub mod surface;

pub use chart_renderer::ChartRenderer;
pub use geometry::{ChartLayout, PlotArea, PlotGeometry, sample_at};
pub use surface::{CanvasSurface, DrawCommand, DrawSurface, RecordingSurface};
