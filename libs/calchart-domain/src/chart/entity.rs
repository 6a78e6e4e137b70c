//! Domain entities for chart generation
//!
//! A `ChartRequest` lives for exactly one invocation: it is built from the
//! request body, its series is rendered into a `ChartImage`, and both are
//! dropped once the response is written. Nothing here is persisted.

use bytes::Bytes;
use chrono::NaiveDate;

/// MIME type of every successfully rendered chart
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

/// A single calorie measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub calories: f64,
}

impl DataPoint {
    pub fn new(date: NaiveDate, calories: f64) -> Self {
        Self { date, calories }
    }
}

/// Calorie measurements ordered ascending by date
///
/// The ordering is established at construction and cannot be broken afterwards,
/// so renderers can rely on it. Points sharing a date keep their input order.
#[derive(Debug, Clone, PartialEq)]
pub struct CalorieSeries {
    points: Vec<DataPoint>,
}

impl CalorieSeries {
    /// Build a series, stably sorting the points by date
    pub fn new(mut points: Vec<DataPoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest date in the series
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Latest date in the series
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Number of days between the first and last point (0 for a single day)
    pub fn span_days(&self) -> i64 {
        match (self.first_date(), self.last_date()) {
            (Some(first), Some(last)) => (last - first).num_days(),
            _ => 0,
        }
    }

    /// Minimum and maximum calorie values, `None` for an empty series
    pub fn calorie_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|p| p.calories).fold(None, |acc, v| {
            Some(match acc {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            })
        })
    }
}

/// A validated chart request
///
/// `start_date` and `end_date` are carried through as advisory bounds. They are
/// validated for format but never used to filter the series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    start_date: NaiveDate,
    end_date: NaiveDate,
    series: CalorieSeries,
}

impl ChartRequest {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, series: CalorieSeries) -> Self {
        Self {
            start_date,
            end_date,
            series,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn series(&self) -> &CalorieSeries {
        &self.series
    }
}

/// An encoded chart ready to be sent to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    bytes: Bytes,
    width: u32,
    height: u32,
}

impl ChartImage {
    /// Wrap JPEG bytes produced by a renderer
    pub fn jpeg(bytes: impl Into<Bytes>, width: u32, height: u32) -> Self {
        Self {
            bytes: bytes.into(),
            width,
            height,
        }
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn content_type(&self) -> &'static str {
        JPEG_CONTENT_TYPE
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
