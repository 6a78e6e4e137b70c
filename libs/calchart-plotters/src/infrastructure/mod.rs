//! Rendering infrastructure

mod config;
mod plotters_renderer;

pub use config::RenderConfig;
pub use plotters_renderer::PlottersRenderer;
