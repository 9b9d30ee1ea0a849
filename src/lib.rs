//! Prevailing Wage Compliance Engine
//!
//! This crate classifies labor-visa case records against region- and
//! occupation-specific prevailing wages and aggregates per-employer
//! compliance statistics.
//!
//! The flow is: reference tables → [`models::GeographyIndex`] and
//! [`models::WageScale`] → [`classification::classify_case`] per case →
//! [`classification::aggregate_employers`] → [`report::ComplianceReport`].

#![warn(missing_docs)]

pub mod api;
pub mod classification;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod tables;
