use std::error::Error;
use std::fmt::{Display, Formatter};
use crate::types::Project;
use crate::storage::ProjectStorage;
use crate::diag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Project name is empty or whitespace-only.
    BlankName,
    /// No record with this identifier.
    UnknownId(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "project name must not be empty"),
            Self::UnknownId(id) => write!(f, "no project with id `{id}`"),
        }
    }
}

impl Error for StoreError {}

/// The project gallery: an in-memory list mirrored wholesale into one
/// storage slot after every mutation. Identifiers are unique within the
/// list; ordering is insertion order and mutations never reorder.
pub struct ProjectStore {
    projects: Vec<Project>,
    backend: Box<dyn ProjectStorage>,
}

impl ProjectStore {
    /// Rehydrate from the storage slot. A missing or unreadable blob falls
    /// back to the seed list; nothing is surfaced to the user beyond a
    /// console warning.
    pub fn load(backend: Box<dyn ProjectStorage>, seeds: &[Project]) -> ProjectStore {
        let projects = match backend.read() {
            Some(blob) => match serde_json::from_str::<Vec<Project>>(&blob) {
                Ok(list) => list,
                Err(e) => {
                    diag::warn(&format!("stored project list unreadable, using defaults: {e}"));
                    seeds.to_vec()
                }
            },
            None => seeds.to_vec(),
        };
        ProjectStore { projects, backend }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.projects).unwrap_or_else(|_| "[]".to_string())
    }

    /// Append a new project. Blank names are rejected; a project arriving
    /// without an id gets one minted from the creation timestamp, bumped
    /// until unique.
    pub fn add(&mut self, mut project: Project, now_ms: u64) -> Result<&Project, StoreError> {
        if project.name.trim().is_empty() {
            return Err(StoreError::BlankName);
        }
        if project.id.is_empty() {
            project.id = now_ms.to_string();
        }
        let mut id = project.id.clone();
        let mut bump = 1u32;
        while self.projects.iter().any(|p| p.id == id) {
            bump += 1;
            id = format!("{}-{}", project.id, bump);
        }
        project.id = id;
        self.projects.push(project);
        self.persist();
        Ok(self.projects.last().unwrap())
    }

    /// Replace the record whose id matches, leaving every other record and
    /// the list order untouched.
    pub fn update(&mut self, project: Project) -> Result<(), StoreError> {
        if project.name.trim().is_empty() {
            return Err(StoreError::BlankName);
        }
        match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => {
                *slot = project;
                self.persist();
                Ok(())
            }
            None => Err(StoreError::UnknownId(project.id)),
        }
    }

    /// Delete by id. The confirmation dialog happens host-side; this is the
    /// post-confirmation primitive.
    pub fn remove(&mut self, id: &str) -> Result<Project, StoreError> {
        match self.projects.iter().position(|p| p.id == id) {
            Some(index) => {
                let removed = self.projects.remove(index);
                self.persist();
                Ok(removed)
            }
            None => Err(StoreError::UnknownId(id.to_string())),
        }
    }

    fn persist(&mut self) {
        let blob = serde_json::to_string(&self.projects).unwrap_or_else(|_| "[]".to_string());
        if !self.backend.write(&blob) {
            diag::warn("project list could not be persisted; changes are session-only");
        }
    }
}

/// Add a tag to an in-progress record. Trims whitespace, ignores empty
/// input, no-op when the tag is already present (case-sensitive).
pub fn add_tag(draft: &mut Project, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || draft.tech.iter().any(|t| t == tag) {
        return false;
    }
    draft.tech.push(tag.to_string());
    true
}

/// Remove a tag from an in-progress record; no-op when absent.
pub fn remove_tag(draft: &mut Project, tag: &str) -> bool {
    let before = draft.tech.len();
    draft.tech.retain(|t| t != tag);
    draft.tech.len() != before
}
