use std::collections::BTreeMap;

use crate::workflows::quote::catalog::ProjectId;
use crate::workflows::quote::quality::{
    aggregate, seed_key, seeded_score, standard_catalog, synthesize, ComparisonError,
    DimensionScore, QualityLabel, Rubric, RubricBand, RubricError, VendorQualityReport,
};

fn report(vendor: &str, scores: &[(&str, u8)]) -> VendorQualityReport {
    let rubric = Rubric::standard();
    VendorQualityReport {
        vendor: vendor.to_string(),
        scores: scores
            .iter()
            .map(|(dimension, score)| {
                (
                    dimension.to_string(),
                    DimensionScore {
                        score: *score,
                        label: rubric.label_for(*score),
                    },
                )
            })
            .collect(),
    }
}

#[test]
fn seeded_scores_are_stable_across_separate_calls() {
    let key = seed_key(&ProjectId("p1".to_string()), "VendorX", "KR", "geocoding");
    let first = seeded_score(&key);
    let second = seeded_score(&key);
    assert_eq!(first, second);
    assert!(first <= 100);
}

#[test]
fn synthesized_reports_are_reproducible() {
    let project = ProjectId("project-7".to_string());
    let dimensions = standard_catalog();

    let first = synthesize(&project, "VendorX", "KR", &dimensions);
    let second = synthesize(&project, "VendorX", "KR", &dimensions);

    assert_eq!(first, second);
    assert_eq!(first.scores.len(), dimensions.len());
}

#[test]
fn report_labels_follow_the_rubric() {
    let project = ProjectId("project-7".to_string());
    let dimensions = standard_catalog();

    let report = synthesize(&project, "VendorY", "EU", &dimensions);

    for (dimension_id, cell) in &report.scores {
        let dimension = dimensions
            .iter()
            .find(|dimension| &dimension.id == dimension_id)
            .expect("dimension in catalog");
        assert_eq!(cell.label, dimension.rubric.label_for(cell.score));
    }
}

#[test]
fn standard_rubric_band_edges() {
    let rubric = Rubric::standard();
    assert_eq!(rubric.label_for(100), QualityLabel::Excellent);
    assert_eq!(rubric.label_for(90), QualityLabel::Excellent);
    assert_eq!(rubric.label_for(89), QualityLabel::Good);
    assert_eq!(rubric.label_for(75), QualityLabel::Good);
    assert_eq!(rubric.label_for(74), QualityLabel::Fair);
    assert_eq!(rubric.label_for(60), QualityLabel::Fair);
    assert_eq!(rubric.label_for(59), QualityLabel::Poor);
    assert_eq!(rubric.label_for(0), QualityLabel::Poor);
}

#[test]
fn rubric_validation_rejects_bad_configurations() {
    assert_eq!(Rubric::new(Vec::new()), Err(RubricError::Empty));

    let uncovered = Rubric::new(vec![RubricBand {
        min: 10,
        label: QualityLabel::Poor,
    }]);
    assert_eq!(uncovered, Err(RubricError::Uncovered { lowest: 10 }));

    let duplicated = Rubric::new(vec![
        RubricBand {
            min: 0,
            label: QualityLabel::Poor,
        },
        RubricBand {
            min: 50,
            label: QualityLabel::Fair,
        },
        RubricBand {
            min: 50,
            label: QualityLabel::Good,
        },
    ]);
    assert_eq!(duplicated, Err(RubricError::DuplicateThreshold { min: 50 }));
}

#[test]
fn rubric_accepts_unsorted_bands() {
    let rubric = Rubric::new(vec![
        RubricBand {
            min: 0,
            label: QualityLabel::Poor,
        },
        RubricBand {
            min: 80,
            label: QualityLabel::Excellent,
        },
        RubricBand {
            min: 40,
            label: QualityLabel::Fair,
        },
    ])
    .expect("valid rubric");

    assert_eq!(rubric.label_for(85), QualityLabel::Excellent);
    assert_eq!(rubric.label_for(40), QualityLabel::Fair);
    assert_eq!(rubric.label_for(39), QualityLabel::Poor);
}

#[test]
fn aggregate_rejects_empty_input() {
    let reports = BTreeMap::new();
    assert_eq!(aggregate(&reports), Err(ComparisonError::EmptyInput));
}

#[test]
fn tied_vendors_are_all_marked_best() {
    let mut reports = BTreeMap::new();
    reports.insert("VendorX".to_string(), report("VendorX", &[("geocoding", 90)]));
    reports.insert("VendorY".to_string(), report("VendorY", &[("geocoding", 90)]));
    reports.insert("VendorZ".to_string(), report("VendorZ", &[("geocoding", 80)]));

    let comparison = aggregate(&reports).expect("aggregation succeeds");

    let best = comparison
        .best_by_dimension
        .get("geocoding")
        .expect("dimension present");
    assert_eq!(best.len(), 2);
    assert!(best.contains(&"VendorX".to_string()));
    assert!(best.contains(&"VendorY".to_string()));
}

#[test]
fn comparison_transposes_vendor_reports_into_dimension_rows() {
    let mut reports = BTreeMap::new();
    reports.insert(
        "VendorX".to_string(),
        report("VendorX", &[("geocoding", 92), ("routing", 60)]),
    );
    reports.insert(
        "VendorY".to_string(),
        report("VendorY", &[("geocoding", 70), ("routing", 88)]),
    );

    let comparison = aggregate(&reports).expect("aggregation succeeds");

    let geocoding = comparison
        .dimensions
        .get("geocoding")
        .expect("geocoding row");
    assert_eq!(geocoding.get("VendorX").map(|cell| cell.score), Some(92));
    assert_eq!(geocoding.get("VendorY").map(|cell| cell.score), Some(70));

    assert_eq!(
        comparison.best_by_dimension.get("geocoding"),
        Some(&vec!["VendorX".to_string()])
    );
    assert_eq!(
        comparison.best_by_dimension.get("routing"),
        Some(&vec!["VendorY".to_string()])
    );
}

#[test]
fn summary_averages_and_overall_winner() {
    let mut reports = BTreeMap::new();
    reports.insert(
        "VendorX".to_string(),
        report("VendorX", &[("geocoding", 90), ("routing", 70)]),
    );
    reports.insert(
        "VendorY".to_string(),
        report("VendorY", &[("geocoding", 60), ("routing", 80)]),
    );

    let comparison = aggregate(&reports).expect("aggregation succeeds");

    assert_eq!(comparison.summary.get("VendorX"), Some(&80.0));
    assert_eq!(comparison.summary.get("VendorY"), Some(&70.0));
    assert_eq!(comparison.best_overall, vec!["VendorX".to_string()]);
}

#[test]
fn overall_ties_keep_every_leader() {
    let mut reports = BTreeMap::new();
    reports.insert(
        "VendorX".to_string(),
        report("VendorX", &[("geocoding", 90), ("routing", 70)]),
    );
    reports.insert(
        "VendorY".to_string(),
        report("VendorY", &[("geocoding", 70), ("routing", 90)]),
    );

    let comparison = aggregate(&reports).expect("aggregation succeeds");

    assert_eq!(comparison.best_overall.len(), 2);
}
