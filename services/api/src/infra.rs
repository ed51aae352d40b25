use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;

use geoquote::workflows::quote::{
    MatchCategory, MatchResult, Product, Project, ProjectId, ProjectRecord, ProjectRepository,
    ProjectSelections, RepositoryError, SelectionChoice, SelectionEntry, SelectionState,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProjectRepository {
    records: Arc<Mutex<HashMap<ProjectId, ProjectRecord>>>,
}

impl ProjectRepository for InMemoryProjectRepository {
    fn insert(&self, record: ProjectRecord) -> Result<ProjectRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.project.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.project.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProjectRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.project.id) {
            guard.insert(record.project.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ProjectId) -> Result<Option<ProjectRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

fn sample_product(id: &str, name: &str, provider: &str, sub_category: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        provider: provider.to_string(),
        sub_category: sub_category.to_string(),
        description: format!("{name} offered by {provider}"),
        features: vec![
            "geocoding".to_string(),
            "routing".to_string(),
            "traffic".to_string(),
        ],
        format: "vector-tiles".to_string(),
        docs_url: Some(format!("https://docs.example.com/{id}")),
    }
}

/// Sample hand-over record standing in for the upstream matching engine
/// during demos.
pub(crate) fn sample_project(id: &str, region: &str) -> Project {
    let match_result = MatchResult {
        categories: vec![
            MatchCategory {
                key: "navigation".to_string(),
                products: vec![
                    sample_product("atlas-nav", "Atlas Navigation", "AtlasMaps", "navigation"),
                    sample_product("orbit-nav", "Orbit Drive", "OrbitGeo", "navigation"),
                ],
            },
            MatchCategory {
                key: "places".to_string(),
                products: vec![
                    sample_product("orbit-places", "Orbit Places", "OrbitGeo", "places"),
                    sample_product("meridian-poi", "Meridian POI", "MeridianData", "places"),
                ],
            },
        ],
    };

    let selections = ProjectSelections::Single {
        state: SelectionState {
            entries: vec![
                SelectionEntry {
                    category: "navigation".to_string(),
                    choice: SelectionChoice::One("atlas-nav".to_string()),
                },
                SelectionEntry {
                    category: "places".to_string(),
                    choice: SelectionChoice::Many(vec![
                        "orbit-places".to_string(),
                        "meridian-poi".to_string(),
                    ]),
                },
            ],
        },
    };

    Project {
        id: ProjectId(id.to_string()),
        region: region.to_string(),
        match_result,
        selected_products: selections,
        multi_environment: false,
    }
}
