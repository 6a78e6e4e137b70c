//! # Calchart Plotters Adapter
//!
//! Implements the domain's `ChartRenderer` port with `plotters`, drawing into an
//! in-memory RGB buffer and encoding it to JPEG with `image`. No temporary files
//! are involved.

pub mod infrastructure;

pub use infrastructure::{PlottersRenderer, RenderConfig};
