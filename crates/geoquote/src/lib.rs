//! Quote and quality-comparison pipeline for recommended map-data
//! products.
//!
//! The library owns the computation between "user has selected products"
//! and "user sees a price and a quality report": selection resolution,
//! tiered pricing, and the deterministic vendor quality comparison.
//! Persistence and transport stay behind the [`workflows::quote::ProjectRepository`]
//! port and the axum router so the surrounding service can swap them out.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
