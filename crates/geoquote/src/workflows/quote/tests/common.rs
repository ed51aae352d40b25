use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::workflows::quote::catalog::{MatchCategory, MatchResult, Product, ProjectId};
use crate::workflows::quote::pricing::PricingRates;
use crate::workflows::quote::quality::standard_catalog;
use crate::workflows::quote::repository::{
    Project, ProjectRecord, ProjectRepository, RepositoryError,
};
use crate::workflows::quote::selection::{
    EnvironmentSelections, ProjectSelections, SelectionChoice, SelectionEntry, SelectionState,
};
use crate::workflows::quote::service::QuoteService;

pub(super) fn product(id: &str, provider: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("{id} dataset"),
        provider: provider.to_string(),
        sub_category: "base-map".to_string(),
        description: format!("Sample catalog entry for {id}"),
        features: vec!["geocoding".to_string(), "routing".to_string()],
        format: "vector-tiles".to_string(),
        docs_url: Some(format!("https://docs.example.com/{id}")),
    }
}

/// Categories A: [p1 (VendorX), p2 (VendorY)] and B: [p2, p3 (VendorZ)];
/// p2 appears in both so resolution has a duplicate to collapse.
pub(super) fn match_result() -> MatchResult {
    let p1 = product("p1", "VendorX");
    let p2 = product("p2", "VendorY");
    let p3 = product("p3", "VendorZ");

    MatchResult {
        categories: vec![
            MatchCategory {
                key: "A".to_string(),
                products: vec![p1, p2.clone()],
            },
            MatchCategory {
                key: "B".to_string(),
                products: vec![p2, p3],
            },
        ],
    }
}

pub(super) fn entry(category: &str, choice: SelectionChoice) -> SelectionEntry {
    SelectionEntry {
        category: category.to_string(),
        choice,
    }
}

pub(super) fn one(id: &str) -> SelectionChoice {
    SelectionChoice::One(id.to_string())
}

pub(super) fn many(ids: &[&str]) -> SelectionChoice {
    SelectionChoice::Many(ids.iter().map(|id| id.to_string()).collect())
}

pub(super) fn single_selection(entries: Vec<SelectionEntry>) -> ProjectSelections {
    ProjectSelections::Single {
        state: SelectionState { entries },
    }
}

pub(super) fn multi_selection(
    mobile: Option<Vec<SelectionEntry>>,
    backend: Option<Vec<SelectionEntry>>,
) -> ProjectSelections {
    ProjectSelections::Multi {
        environments: EnvironmentSelections {
            mobile: mobile.map(|entries| SelectionState { entries }),
            backend: backend.map(|entries| SelectionState { entries }),
        },
    }
}

pub(super) fn project(id: &str, selections: ProjectSelections, multi: bool) -> Project {
    Project {
        id: ProjectId(id.to_string()),
        region: "KR".to_string(),
        match_result: match_result(),
        selected_products: selections,
        multi_environment: multi,
    }
}

pub(super) fn rates() -> PricingRates {
    PricingRates {
        base_per_country: 20,
        additional_feature_per_country: 10,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<ProjectId, ProjectRecord>>>,
}

impl ProjectRepository for MemoryRepository {
    fn insert(&self, record: ProjectRecord) -> Result<ProjectRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.contains_key(&record.project.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.project.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProjectRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if !guard.contains_key(&record.project.id) {
            return Err(RepositoryError::NotFound);
        }
        guard.insert(record.project.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ProjectId) -> Result<Option<ProjectRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard.get(id).cloned())
    }
}

/// Repository double whose updates always fail, for persist-atomicity
/// assertions.
#[derive(Default, Clone)]
pub(super) struct BrokenUpdateRepository {
    inner: MemoryRepository,
}

impl BrokenUpdateRepository {
    pub(super) fn stored(&self, id: &ProjectId) -> Option<ProjectRecord> {
        self.inner.fetch(id).expect("fetch")
    }
}

impl ProjectRepository for BrokenUpdateRepository {
    fn insert(&self, record: ProjectRecord) -> Result<ProjectRecord, RepositoryError> {
        self.inner.insert(record)
    }

    fn update(&self, _record: ProjectRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("update rejected".to_string()))
    }

    fn fetch(&self, id: &ProjectId) -> Result<Option<ProjectRecord>, RepositoryError> {
        self.inner.fetch(id)
    }
}

pub(super) fn build_service() -> (QuoteService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = QuoteService::new(repository.clone(), rates(), standard_catalog());
    (service, repository)
}
