//! In-memory entity store
//!
//! Holds the developer and project sequences for the lifetime of the process.
//! Lookups are linear scans over insertion order; there are no indexes and no
//! referential checks on write.

pub mod entities;
pub mod seed_data;

pub use entities::*;

use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct Tables {
    developers: Vec<Developer>,
    projects: Vec<Project>,
    next_developer_id: i32,
    next_project_id: i32,
}

impl Tables {
    fn from_records(developers: Vec<Developer>, projects: Vec<Project>) -> Self {
        let next_developer_id = developers.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        let next_project_id = projects.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            developers,
            projects,
            next_developer_id,
            next_project_id,
        }
    }
}

/// Owner of both record sequences.
///
/// Built once at startup and shared as `Arc<EntityStore>`. Ids come from a
/// per-sequence counter that is advanced under the same write lock as the
/// append, so concurrent mutations never hand out the same id.
#[derive(Debug)]
pub struct EntityStore {
    tables: RwLock<Tables>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    /// Empty store; the first developer and project both get id 1.
    pub fn new() -> Self {
        Self::with_records(Vec::new(), Vec::new())
    }

    /// Store preloaded with the sample developers and projects.
    pub fn seeded() -> Self {
        Self::with_records(seed_data::sample_developers(), seed_data::sample_projects())
    }

    /// Store over caller-supplied records. Counters continue from the highest
    /// id present, so gaps in the supplied ids are never reused.
    pub fn with_records(developers: Vec<Developer>, projects: Vec<Project>) -> Self {
        Self {
            tables: RwLock::new(Tables::from_records(developers, projects)),
        }
    }

    pub async fn developers(&self) -> Vec<Developer> {
        self.tables.read().await.developers.clone()
    }

    pub async fn projects(&self) -> Vec<Project> {
        self.tables.read().await.projects.clone()
    }

    /// First developer with the given id
    pub async fn developer(&self, id: i32) -> Option<Developer> {
        let tables = self.tables.read().await;
        tables.developers.iter().find(|d| d.id == id).cloned()
    }

    /// First project with the given id
    pub async fn project(&self, id: i32) -> Option<Project> {
        let tables = self.tables.read().await;
        tables.projects.iter().find(|p| p.id == id).cloned()
    }

    /// Projects whose `developer_id` matches, in insertion order.
    pub async fn projects_for_developer(&self, developer_id: i32) -> Vec<Project> {
        let tables = self.tables.read().await;
        tables
            .projects
            .iter()
            .filter(|p| p.developer_id == developer_id)
            .cloned()
            .collect()
    }

    pub async fn add_developer(&self, name: impl Into<String>) -> Developer {
        let mut tables = self.tables.write().await;
        let developer = Developer {
            id: tables.next_developer_id,
            name: name.into(),
        };
        tables.next_developer_id += 1;
        tables.developers.push(developer.clone());
        debug!("Added developer {} ({})", developer.id, developer.name);
        developer
    }

    /// Appends a project. `developer_id` is stored as given, even when no
    /// developer carries that id.
    pub async fn add_project(&self, name: impl Into<String>, developer_id: i32) -> Project {
        let mut tables = self.tables.write().await;
        let project = Project {
            id: tables.next_project_id,
            name: name.into(),
            developer_id,
        };
        tables.next_project_id += 1;
        tables.projects.push(project.clone());
        debug!(
            "Added project {} ({}) for developer {}",
            project.id, project.name, project.developer_id
        );
        project
    }

    /// `(developers, projects)` sequence lengths
    pub async fn counts(&self) -> (usize, usize) {
        let tables = self.tables.read().await;
        (tables.developers.len(), tables.projects.len())
    }
}
