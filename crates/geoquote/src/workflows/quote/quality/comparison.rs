use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::report::{DimensionScore, VendorQualityReport};

/// Errors raised while aggregating vendor reports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComparisonError {
    #[error("quality comparison requires at least one vendor report")]
    EmptyInput,
}

/// Dimension-keyed comparison matrix across vendors.
///
/// `best_by_dimension` and `best_overall` list every vendor tied at the
/// maximum; ties are never broken arbitrarily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityComparisonData {
    pub dimensions: BTreeMap<String, BTreeMap<String, DimensionScore>>,
    pub best_by_dimension: BTreeMap<String, Vec<String>>,
    pub summary: BTreeMap<String, f64>,
    pub best_overall: Vec<String>,
}

/// Running per-vendor total used for the overall ranking.
#[derive(Debug, Clone, Copy, Default)]
struct ScoreTotal {
    sum: u64,
    count: u64,
}

impl ScoreTotal {
    fn average(self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }

    /// Compare averages without floating point, via cross-multiplication.
    fn beats(self, other: ScoreTotal) -> bool {
        self.sum * other.count.max(1) > other.sum * self.count.max(1)
    }

    fn ties(self, other: ScoreTotal) -> bool {
        self.sum * other.count.max(1) == other.sum * self.count.max(1)
    }
}

/// Transpose vendor-keyed reports into the comparison matrix.
pub fn aggregate(
    reports: &BTreeMap<String, VendorQualityReport>,
) -> Result<QualityComparisonData, ComparisonError> {
    if reports.is_empty() {
        return Err(ComparisonError::EmptyInput);
    }

    let mut dimensions: BTreeMap<String, BTreeMap<String, DimensionScore>> = BTreeMap::new();
    let mut totals: BTreeMap<String, ScoreTotal> = BTreeMap::new();

    for (vendor, report) in reports {
        let total = totals.entry(vendor.clone()).or_default();
        for (dimension, cell) in &report.scores {
            dimensions
                .entry(dimension.clone())
                .or_default()
                .insert(vendor.clone(), *cell);
            total.sum += u64::from(cell.score);
            total.count += 1;
        }
    }

    let mut best_by_dimension = BTreeMap::new();
    for (dimension, row) in &dimensions {
        let Some(top) = row.values().map(|cell| cell.score).max() else {
            continue;
        };
        let leaders = row
            .iter()
            .filter(|(_, cell)| cell.score == top)
            .map(|(vendor, _)| vendor.clone())
            .collect();
        best_by_dimension.insert(dimension.clone(), leaders);
    }

    let Some(top_total) = totals.values().copied().reduce(|best, candidate| {
        if candidate.beats(best) {
            candidate
        } else {
            best
        }
    }) else {
        return Err(ComparisonError::EmptyInput);
    };

    let best_overall = totals
        .iter()
        .filter(|(_, total)| total.ties(top_total))
        .map(|(vendor, _)| vendor.clone())
        .collect();

    let summary = totals
        .into_iter()
        .map(|(vendor, total)| (vendor, total.average()))
        .collect();

    Ok(QualityComparisonData {
        dimensions,
        best_by_dimension,
        summary,
        best_overall,
    })
}
