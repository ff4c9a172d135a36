//! Hours-of-Service Trip Planner
//!
//! This crate converts a planned multi-leg driving route into a duty schedule
//! that complies with US Hours-of-Service (HOS) rules: the 11-hour driving cap,
//! the 14-hour on-duty shift cap, the mandatory 30-minute break after 8 hours
//! of driving, the 10-hour off-duty reset, the 70-hour/8-day cycle limit, and
//! periodic fuel stops.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod models;
pub mod route;
pub mod simulation;
