//! Quote pipeline: selection resolution, tiered pricing, and the
//! deterministic cross-vendor quality comparison.
//!
//! The upstream matching engine hands over a project record; this module
//! turns the user's selection into a canonical product list, a price
//! breakdown, and a vendor quality matrix, all through the public service
//! facade and router.

pub mod catalog;
pub mod pricing;
pub mod quality;
pub mod repository;
pub mod router;
pub mod selection;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{MatchCategory, MatchResult, Product, ProjectId, ProjectStage};
pub use pricing::{price, PricingData, PricingInput, PricingRates};
pub use quality::{
    aggregate, seed_key, seeded_score, standard_catalog, synthesize, ComparisonError,
    DimensionScore, QualityComparisonData, QualityDimension, QualityLabel, Rubric, RubricBand,
    RubricError, VendorQualityReport,
};
pub use repository::{
    Project, ProjectRecord, ProjectRepository, ProjectStatusView, RepositoryError,
};
pub use router::quote_router;
pub use selection::{
    resolve_selection, EnvironmentSelections, ProjectSelections, ResolvedSelection,
    SelectionChoice, SelectionEntry, SelectionError, SelectionShape, SelectionState,
};
pub use service::{QuoteService, QuoteServiceError};
