use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::catalog::{MatchResult, Product};

/// A category's chosen product reference(s).
///
/// Stored selections carry either a bare id or a list of ids depending on
/// whether the category allows one or many choices; both normalize into a
/// uniform id iteration during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionChoice {
    One(String),
    Many(Vec<String>),
}

impl SelectionChoice {
    fn ids(&self) -> impl Iterator<Item = &str> {
        match self {
            SelectionChoice::One(id) => std::slice::from_ref(id).iter(),
            SelectionChoice::Many(ids) => ids.iter(),
        }
        .map(String::as_str)
    }
}

/// One category-to-choice pairing inside a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub category: String,
    pub choice: SelectionChoice,
}

/// Ordered selection record for a single target environment.
///
/// Entry order is the user's insertion order and is significant: it fixes
/// the position of each product in the resolved list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub entries: Vec<SelectionEntry>,
}

/// Per-environment selections for a multi-environment project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSelections {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<SelectionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<SelectionState>,
}

impl EnvironmentSelections {
    /// Present environments in the fixed `mobile`, `backend` order.
    fn in_order(&self) -> impl Iterator<Item = &SelectionState> {
        [self.mobile.as_ref(), self.backend.as_ref()]
            .into_iter()
            .flatten()
    }
}

/// Selection record stored on a project, tagged with its shape.
///
/// The tag is carried alongside the data and checked against the
/// project-level multi-environment flag; the shape is never inferred from
/// the data itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectSelections {
    Single { state: SelectionState },
    Multi { environments: EnvironmentSelections },
}

/// Shape a resolution call expected, used in mismatch reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionShape {
    Single,
    Multi,
}

impl SelectionShape {
    pub const fn label(self) -> &'static str {
        match self {
            SelectionShape::Single => "single",
            SelectionShape::Multi => "multi",
        }
    }
}

/// Errors raised while resolving a selection record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("selection record is {} but the project flag requires {}", .found.label(), .expected.label())]
    ShapeMismatch {
        expected: SelectionShape,
        found: SelectionShape,
    },
}

/// Canonical product list produced by the resolver.
///
/// `missing_references` counts selected ids with no catalog match; stale
/// references are skipped rather than failing the resolution, but the
/// count is surfaced so callers can log it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSelection {
    pub products: Vec<Product>,
    pub missing_references: usize,
}

/// Normalize a stored selection into an ordered, de-duplicated product list.
///
/// Pure function of its three inputs: identical inputs always produce the
/// identical ordering.
pub fn resolve_selection(
    match_result: &MatchResult,
    selections: &ProjectSelections,
    multi_environment: bool,
) -> Result<ResolvedSelection, SelectionError> {
    let index = match_result.product_index();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut products = Vec::new();
    let mut missing_references = 0;

    let states: Vec<&SelectionState> = match (selections, multi_environment) {
        (ProjectSelections::Single { state }, false) => vec![state],
        (ProjectSelections::Multi { environments }, true) => environments.in_order().collect(),
        (ProjectSelections::Single { .. }, true) => {
            return Err(SelectionError::ShapeMismatch {
                expected: SelectionShape::Multi,
                found: SelectionShape::Single,
            })
        }
        (ProjectSelections::Multi { .. }, false) => {
            return Err(SelectionError::ShapeMismatch {
                expected: SelectionShape::Single,
                found: SelectionShape::Multi,
            })
        }
    };

    for state in states {
        for entry in &state.entries {
            for id in entry.choice.ids() {
                if !seen.insert(id) {
                    continue;
                }
                match index.get(id) {
                    Some(product) => products.push((*product).clone()),
                    None => missing_references += 1,
                }
            }
        }
    }

    Ok(ResolvedSelection {
        products,
        missing_references,
    })
}
