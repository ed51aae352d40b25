use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dimensions::{QualityDimension, QualityLabel};
use super::seed::{seed_key, seeded_score};
use crate::workflows::quote::catalog::ProjectId;

/// One scored cell: the numeric draw plus its rubric label. Consumers
/// choose which side to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub score: u8,
    pub label: QualityLabel,
}

/// Per-dimension scores for one vendor in one project/region context.
///
/// Derived data: regenerable from its seed inputs, never stored as ground
/// truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorQualityReport {
    pub vendor: String,
    pub scores: BTreeMap<String, DimensionScore>,
}

/// Synthesize a vendor's report across the dimension catalog.
///
/// Each (project, vendor, region, dimension) tuple is an independent
/// deterministic draw.
pub fn synthesize(
    project: &ProjectId,
    vendor: &str,
    region: &str,
    dimensions: &[QualityDimension],
) -> VendorQualityReport {
    let scores = dimensions
        .iter()
        .map(|dimension| {
            let score = seeded_score(&seed_key(project, vendor, region, &dimension.id));
            (
                dimension.id.clone(),
                DimensionScore {
                    score,
                    label: dimension.rubric.label_for(score),
                },
            )
        })
        .collect();

    VendorQualityReport {
        vendor: vendor.to_string(),
        scores,
    }
}
