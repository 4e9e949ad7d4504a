#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region statistics, incident filtering, and chart series.
//!
//! Everything here is a pure function over already-generated incidents
//! and totals. There are two risk-score formulas, one per source: see
//! [`stats::from_totals`] and [`stats::from_incidents`].

pub mod charts;
pub mod filter;
pub mod stats;
