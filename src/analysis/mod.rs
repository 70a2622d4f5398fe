// src/analysis/mod.rs
// Suitability analysis: parameter catalog, criteria scorer, summary stats,
// and the templated report builder.

pub mod parameters;
pub mod report;
pub mod scoring;
pub mod stats;
