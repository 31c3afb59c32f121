//! Loan eligibility simulation.
//!
//! Applicant details collected by one of the two form front ends in [`simulation`] are turned
//! into an [`scoring::ApplicantRecord`], expanded with derived features, aligned to the
//! classifier's column order and scored by the loaded model artifacts.

pub mod batch;
pub mod config;
pub mod error;
pub mod scoring;
pub mod simulation;
pub mod telemetry;
