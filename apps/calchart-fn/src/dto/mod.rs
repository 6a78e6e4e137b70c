//! Request/response DTOs

pub mod chart;
