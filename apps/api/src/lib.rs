//! CV Tracker API: keyword-based CV / job description compatibility scoring.
//!
//! `matching` is the pure engine; everything else is the HTTP caller around it.

pub mod compatibility;
pub mod config;
pub mod errors;
pub mod matching;
pub mod routes;
pub mod state;
