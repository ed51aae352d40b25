//! Deterministic quality scoring: seeded draws, per-vendor reports, and
//! the cross-vendor comparison matrix.

pub mod comparison;
pub mod dimensions;
pub mod report;
pub mod seed;

pub use comparison::{aggregate, ComparisonError, QualityComparisonData};
pub use dimensions::{
    standard_catalog, QualityDimension, QualityLabel, Rubric, RubricBand, RubricError,
};
pub use report::{synthesize, DimensionScore, VendorQualityReport};
pub use seed::{seed_key, seeded_score};
