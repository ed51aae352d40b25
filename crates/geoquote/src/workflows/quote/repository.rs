use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{MatchResult, ProjectId, ProjectStage};
use super::pricing::PricingData;
use super::quality::QualityComparisonData;
use super::selection::ProjectSelections;

/// Project record as handed over by the surrounding application: the
/// upstream match result plus the user's current selections.
///
/// Read-only to this core; selections are edited through the external UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub region: String,
    pub match_result: MatchResult,
    pub selected_products: ProjectSelections,
    #[serde(rename = "is_multi_environment")]
    pub multi_environment: bool,
}

/// Repository record wrapping the project with its workflow stage and the
/// derived artifacts persisted so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub project: Project,
    pub stage: ProjectStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<QualityComparisonData>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectRecord {
    pub fn status_view(&self) -> ProjectStatusView {
        ProjectStatusView {
            project_id: self.project.id.clone(),
            region: self.project.region.clone(),
            stage: self.stage.label(),
            pricing: self.pricing.clone(),
            comparison: self.comparison.clone(),
            updated_at: self.updated_at,
        }
    }
}

/// Storage abstraction so the service module can be exercised in
/// isolation; the application supplies the concrete store.
pub trait ProjectRepository: Send + Sync {
    fn insert(&self, record: ProjectRecord) -> Result<ProjectRecord, RepositoryError>;
    fn update(&self, record: ProjectRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ProjectId) -> Result<Option<ProjectRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a project's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStatusView {
    pub project_id: ProjectId,
    pub region: String,
    pub stage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<QualityComparisonData>,
    pub updated_at: DateTime<Utc>,
}
