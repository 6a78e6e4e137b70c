//! HTTP handlers

pub mod chart;
