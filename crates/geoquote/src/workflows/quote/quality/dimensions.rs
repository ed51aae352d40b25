use serde::{Deserialize, Serialize};

/// Qualitative labels a rubric can assign to a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityLabel {
    pub const fn label(self) -> &'static str {
        match self {
            QualityLabel::Excellent => "excellent",
            QualityLabel::Good => "good",
            QualityLabel::Fair => "fair",
            QualityLabel::Poor => "poor",
        }
    }
}

/// One rubric band: scores at or above `min` earn `label`, unless a higher
/// band claims them first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricBand {
    pub min: u8,
    pub label: QualityLabel,
}

/// Threshold rubric mapping a 0-100 score to a qualitative label.
///
/// Bands are held in descending threshold order and must cover the full
/// range: the lowest band starts at 0 so no score falls through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    bands: Vec<RubricBand>,
}

/// Errors raised when an injected rubric configuration is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RubricError {
    #[error("rubric has no bands")]
    Empty,
    #[error("rubric does not cover the full score range: lowest band starts at {lowest}")]
    Uncovered { lowest: u8 },
    #[error("rubric bands repeat the threshold {min}")]
    DuplicateThreshold { min: u8 },
}

impl Rubric {
    /// Build a rubric from injected bands, validating coverage.
    pub fn new(mut bands: Vec<RubricBand>) -> Result<Self, RubricError> {
        if bands.is_empty() {
            return Err(RubricError::Empty);
        }
        bands.sort_by(|a, b| b.min.cmp(&a.min));
        for pair in bands.windows(2) {
            if pair[0].min == pair[1].min {
                return Err(RubricError::DuplicateThreshold { min: pair[0].min });
            }
        }
        let lowest = bands[bands.len() - 1].min;
        if lowest != 0 {
            return Err(RubricError::Uncovered { lowest });
        }
        Ok(Self { bands })
    }

    /// Default thresholds shared by the standard dimension catalog.
    pub fn standard() -> Self {
        Self {
            bands: vec![
                RubricBand {
                    min: 90,
                    label: QualityLabel::Excellent,
                },
                RubricBand {
                    min: 75,
                    label: QualityLabel::Good,
                },
                RubricBand {
                    min: 60,
                    label: QualityLabel::Fair,
                },
                RubricBand {
                    min: 0,
                    label: QualityLabel::Poor,
                },
            ],
        }
    }

    /// Label for a numeric score. Bands are descending, so the first hit
    /// is the highest band the score qualifies for.
    pub fn label_for(&self, score: u8) -> QualityLabel {
        self.bands
            .iter()
            .find(|band| score >= band.min)
            .map(|band| band.label)
            .unwrap_or(QualityLabel::Poor)
    }
}

/// Fixed catalog entry describing one quality axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityDimension {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub rubric: Rubric,
}

impl QualityDimension {
    fn standard(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            rubric: Rubric::standard(),
        }
    }
}

/// The static dimension catalog used for vendor comparisons.
pub fn standard_catalog() -> Vec<QualityDimension> {
    vec![
        QualityDimension::standard("geocoding_accuracy", "Geocoding accuracy", "crosshair"),
        QualityDimension::standard("poi_coverage", "POI coverage", "map-pin"),
        QualityDimension::standard("road_freshness", "Road network freshness", "clock"),
        QualityDimension::standard("routing_quality", "Routing quality", "route"),
        QualityDimension::standard("support_responsiveness", "Support responsiveness", "headset"),
    ]
}
