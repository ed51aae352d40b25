use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;

use super::catalog::{ProjectId, ProjectStage};
use super::pricing::{price, PricingData, PricingInput, PricingRates};
use super::quality::{
    aggregate, synthesize, ComparisonError, QualityComparisonData, QualityDimension,
};
use super::repository::{Project, ProjectRecord, ProjectRepository, RepositoryError};
use super::selection::{resolve_selection, ResolvedSelection, SelectionError};

/// Facade composing the resolver, pricing engine, and quality pipeline
/// over the injected storage port.
///
/// The core computations stay pure; this layer only adds port I/O and the
/// record bookkeeping around it.
pub struct QuoteService<R> {
    repository: Arc<R>,
    rates: PricingRates,
    dimensions: Vec<QualityDimension>,
}

impl<R> QuoteService<R>
where
    R: ProjectRepository + 'static,
{
    pub fn new(repository: Arc<R>, rates: PricingRates, dimensions: Vec<QualityDimension>) -> Self {
        Self {
            repository,
            rates,
            dimensions,
        }
    }

    /// Register a project handed over by the matching stage.
    pub fn register(&self, project: Project) -> Result<ProjectRecord, QuoteServiceError> {
        let record = ProjectRecord {
            project,
            stage: ProjectStage::Selection,
            pricing: None,
            comparison: None,
            updated_at: Utc::now(),
        };
        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Resolve the stored selection into its canonical product list.
    pub fn resolved_products(
        &self,
        project_id: &ProjectId,
    ) -> Result<ResolvedSelection, QuoteServiceError> {
        let record = self.fetch(project_id)?;
        let resolution = resolve_selection(
            &record.project.match_result,
            &record.project.selected_products,
            record.project.multi_environment,
        )?;
        Ok(resolution)
    }

    /// Price the project and persist the breakdown.
    ///
    /// The breakdown is returned only after the updated record is stored;
    /// a failed persist surfaces the error and leaves the stored record
    /// unchanged.
    pub fn price(
        &self,
        project_id: &ProjectId,
        input: PricingInput,
    ) -> Result<PricingData, QuoteServiceError> {
        let mut record = self.fetch(project_id)?;

        let data = price(&self.rates, &input);

        record.pricing = Some(data.clone());
        record.stage = record.stage.max(ProjectStage::Pricing);
        record.updated_at = Utc::now();
        self.repository.update(record)?;

        Ok(data)
    }

    /// Build and persist the cross-vendor quality comparison for the
    /// vendors present in the project's resolved selection.
    pub fn compare(
        &self,
        project_id: &ProjectId,
    ) -> Result<QualityComparisonData, QuoteServiceError> {
        let mut record = self.fetch(project_id)?;

        let resolution = resolve_selection(
            &record.project.match_result,
            &record.project.selected_products,
            record.project.multi_environment,
        )?;

        let mut reports = BTreeMap::new();
        for product in &resolution.products {
            if reports.contains_key(&product.provider) {
                continue;
            }
            let report = synthesize(
                &record.project.id,
                &product.provider,
                &record.project.region,
                &self.dimensions,
            );
            reports.insert(product.provider.clone(), report);
        }

        let comparison = aggregate(&reports)?;

        record.comparison = Some(comparison.clone());
        record.stage = record.stage.max(ProjectStage::Quality);
        record.updated_at = Utc::now();
        self.repository.update(record)?;

        Ok(comparison)
    }

    /// Fetch a project record and current status for API responses.
    pub fn get(&self, project_id: &ProjectId) -> Result<ProjectRecord, QuoteServiceError> {
        self.fetch(project_id)
    }

    fn fetch(&self, project_id: &ProjectId) -> Result<ProjectRecord, QuoteServiceError> {
        let record = self
            .repository
            .fetch(project_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the quote service.
#[derive(Debug, thiserror::Error)]
pub enum QuoteServiceError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Comparison(#[from] ComparisonError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
