//! Read models for query operations
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of stored data for reporting.

pub mod report_model;

pub use report_model::{LanguageRankingView, ReportModel, ScannedGroupView};
