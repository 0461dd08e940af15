use std::sync::Arc;

use tokio::sync::broadcast;

use crate::{
    ChangeEvent, EngineError, MemoryStore, ResultEngine, Vacation, VacationStore, Workspace,
};

mod categories;
mod items;
mod summary;
mod vacations;
mod workspaces;

pub use vacations::{VacationDraft, VacationPatch};

/// The engine façade every caller goes through.
///
/// It owns nothing but a handle to the injected document store: each
/// operation loads a snapshot, applies a pure mutation and writes the whole
/// document back (last-write-wins).
pub struct Engine {
    store: Arc<dyn VacationStore>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Subscribes to the store's change feed.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.store.subscribe()
    }

    fn require_workspace(&self, workspace_id: &str, user_id: &str) -> ResultEngine<Workspace> {
        let workspace = self
            .store
            .workspace(workspace_id)
            .ok_or_else(|| EngineError::KeyNotFound("workspace not exists".to_string()))?;
        if !workspace.is_member(user_id) {
            return Err(EngineError::Forbidden(
                "not a member of this workspace".to_string(),
            ));
        }
        Ok(workspace)
    }

    fn require_vacation(
        &self,
        workspace_id: &str,
        vacation_id: &str,
        user_id: &str,
    ) -> ResultEngine<Vacation> {
        self.require_workspace(workspace_id, user_id)?;
        self.store
            .vacation(workspace_id, vacation_id)
            .ok_or_else(|| EngineError::KeyNotFound("vacation not exists".to_string()))
    }
}

fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// The builder for `Engine`
pub struct EngineBuilder {
    store: Arc<dyn VacationStore>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
        }
    }
}

impl EngineBuilder {
    /// Pass the backing document store. Defaults to a fresh [`MemoryStore`].
    pub fn store(mut self, store: Arc<dyn VacationStore>) -> EngineBuilder {
        self.store = store;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine { store: self.store }
    }
}
