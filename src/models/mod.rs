//! Export rows and command result models
//!
//! [`rows`] maps API records onto CSV cells; [`report`] holds the display
//! models printed after a command finishes.

pub mod report;
pub mod rows;

pub use report::{ExportSummary, PatchOutcome, PatchOutcomeDisplay, PatchResult, PatchSummary};
