//! Drover Harness: problem domains and run tooling for `drover_search`.
//!
//! The harness owns everything the engine deliberately does not: concrete
//! worlds (the sheep-pen domain), numeric-settings validation, scenario
//! wiring, and result presentation (text reports, JSON artifacts, and
//! their digests).
//!
//! # Key types
//!
//! - [`contract::WorldError`] — domain construction-time validation errors
//! - [`worlds::sheep_pen::SheepPenWorld`] — the two-pen herding domain
//! - [`runner::ScenarioRun`] — one engine run with its stats and labels
//! - [`report::SolutionReportV1`] — serializable, digestable run report

#![forbid(unsafe_code)]

pub mod contract;
pub mod report;
pub mod runner;
pub mod worlds;
