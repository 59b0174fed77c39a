//! Eligibility screening core for university admissions.
//!
//! The crate normalizes certificate-specific grades into one comparable scale
//! and evaluates declarative admission rules against an applicant's results,
//! producing decisions an admissions officer can explain line by line.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
