use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for quote projects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

/// Catalog product as delivered by the upstream matching engine.
///
/// Products are owned by the catalog and referenced (never owned) by
/// selections; this core treats them as read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub sub_category: String,
    pub description: String,
    pub features: Vec<String>,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
}

/// One matched category with its ordered product candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCategory {
    pub key: String,
    pub products: Vec<Product>,
}

/// Output of the upstream matching engine, stored verbatim on the project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub categories: Vec<MatchCategory>,
}

impl MatchResult {
    /// Flatten every category into a single id-to-product index.
    ///
    /// Later duplicates of an id do not displace the first occurrence, so
    /// lookups stay stable when two categories carry the same product.
    pub fn product_index(&self) -> HashMap<&str, &Product> {
        let mut index = HashMap::new();
        for category in &self.categories {
            for product in &category.products {
                index.entry(product.id.as_str()).or_insert(product);
            }
        }
        index
    }
}

/// Workflow stage markers for a quote project. Declaration order is the
/// workflow order, so `Ord` gives stage progression directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProjectStage {
    Selection,
    Pricing,
    Quality,
    Report,
}

impl ProjectStage {
    pub const fn label(self) -> &'static str {
        match self {
            ProjectStage::Selection => "selection",
            ProjectStage::Pricing => "pricing",
            ProjectStage::Quality => "quality",
            ProjectStage::Report => "report",
        }
    }

    pub fn ordered() -> [ProjectStage; 4] {
        [
            ProjectStage::Selection,
            ProjectStage::Pricing,
            ProjectStage::Quality,
            ProjectStage::Report,
        ]
    }
}
