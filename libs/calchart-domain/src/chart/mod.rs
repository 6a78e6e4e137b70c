//! Chart domain module
//!
//! Everything between "bytes arrived" and "series ready to draw": the entities,
//! strict date parsing, the record table built from the `data` array, payload
//! validation and the service tying validation to a renderer.

pub mod dates;
mod entity;
mod error;
mod payload;
mod service;
pub mod table;

pub use dates::parse_iso_date;
pub use entity::{CalorieSeries, ChartImage, ChartRequest, DataPoint, JPEG_CONTENT_TYPE};
pub use error::{ChartError, Result};
pub use payload::{parse_chart_request, REQUIRED_FIELDS};
pub use service::ChartService;
pub use table::RecordTable;
