//! The repository boundary towards the external persistence collaborator.
//!
//! The engine never talks to a database directly: it reads and writes whole
//! [`Workspace`]/[`Vacation`] documents through the [`VacationStore`] trait,
//! with last-write-wins semantics at the document level. [`MemoryStore`] is
//! the in-process implementation used by the server and by tests; a remote
//! document database would implement the same trait.

use std::{
    collections::{BTreeMap, HashMap},
    sync::{PoisonError, RwLock},
};

use tokio::sync::broadcast;

use crate::{Vacation, Workspace};

/// Change notification emitted after every successful write.
///
/// Mirrors the subscribe-to-changes operation of the persistence
/// collaborator: receivers get told *what* changed and re-read the
/// documents themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangeEvent {
    WorkspaceUpserted {
        workspace_id: String,
    },
    WorkspaceDeleted {
        workspace_id: String,
    },
    VacationUpserted {
        workspace_id: String,
        vacation_id: String,
    },
    VacationDeleted {
        workspace_id: String,
        vacation_id: String,
    },
}

/// Document-level storage operations for workspaces and their vacations.
///
/// `put_*` is an unconditional upsert: whichever writer lands last wins the
/// whole document. Conflict resolution beyond that is explicitly out of
/// scope for the engine.
pub trait VacationStore: Send + Sync {
    fn workspace(&self, workspace_id: &str) -> Option<Workspace>;
    fn put_workspace(&self, workspace: Workspace);
    /// Deletes a workspace and every vacation in it.
    fn delete_workspace(&self, workspace_id: &str) -> bool;

    fn vacation(&self, workspace_id: &str, vacation_id: &str) -> Option<Vacation>;
    /// All vacations of a workspace, oldest first.
    fn list_vacations(&self, workspace_id: &str) -> Vec<Vacation>;
    fn put_vacation(&self, vacation: Vacation);
    fn delete_vacation(&self, workspace_id: &str, vacation_id: &str) -> bool;

    /// Subscribes to the change feed. Events emitted before the call are
    /// not replayed.
    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent>;
}

const EVENT_CHANNEL_CAPACITY: usize = 256;

#[derive(Default)]
struct Documents {
    workspaces: HashMap<String, Workspace>,
    // Vacations per workspace, keyed by vacation id.
    vacations: HashMap<String, BTreeMap<String, Vacation>>,
}

/// In-memory implementation of [`VacationStore`].
pub struct MemoryStore {
    documents: RwLock<Documents>,
    events: broadcast::Sender<ChangeEvent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            documents: RwLock::new(Documents::default()),
            events,
        }
    }

    fn publish(&self, event: ChangeEvent) {
        // Nobody listening is fine.
        let _ = self.events.send(event);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VacationStore for MemoryStore {
    fn workspace(&self, workspace_id: &str) -> Option<Workspace> {
        let documents = self
            .documents
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        documents.workspaces.get(workspace_id).cloned()
    }

    fn put_workspace(&self, workspace: Workspace) {
        let workspace_id = workspace.id.clone();
        {
            let mut documents = self
                .documents
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            documents.workspaces.insert(workspace_id.clone(), workspace);
        }
        self.publish(ChangeEvent::WorkspaceUpserted { workspace_id });
    }

    fn delete_workspace(&self, workspace_id: &str) -> bool {
        let removed = {
            let mut documents = self
                .documents
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            documents.vacations.remove(workspace_id);
            documents.workspaces.remove(workspace_id).is_some()
        };
        if removed {
            self.publish(ChangeEvent::WorkspaceDeleted {
                workspace_id: workspace_id.to_string(),
            });
        }
        removed
    }

    fn vacation(&self, workspace_id: &str, vacation_id: &str) -> Option<Vacation> {
        let documents = self
            .documents
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        documents
            .vacations
            .get(workspace_id)
            .and_then(|vacations| vacations.get(vacation_id))
            .cloned()
    }

    fn list_vacations(&self, workspace_id: &str) -> Vec<Vacation> {
        let documents = self
            .documents
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut vacations: Vec<Vacation> = documents
            .vacations
            .get(workspace_id)
            .map(|vacations| vacations.values().cloned().collect())
            .unwrap_or_default();
        vacations.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        vacations
    }

    fn put_vacation(&self, vacation: Vacation) {
        let workspace_id = vacation.workspace_id.clone();
        let vacation_id = vacation.id.clone();
        {
            let mut documents = self
                .documents
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            documents
                .vacations
                .entry(workspace_id.clone())
                .or_default()
                .insert(vacation_id.clone(), vacation);
        }
        self.publish(ChangeEvent::VacationUpserted {
            workspace_id,
            vacation_id,
        });
    }

    fn delete_vacation(&self, workspace_id: &str, vacation_id: &str) -> bool {
        let removed = {
            let mut documents = self
                .documents
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            documents
                .vacations
                .get_mut(workspace_id)
                .and_then(|vacations| vacations.remove(vacation_id))
                .is_some()
        };
        if removed {
            self.publish(ChangeEvent::VacationDeleted {
                workspace_id: workspace_id.to_string(),
                vacation_id: vacation_id.to_string(),
            });
        }
        removed
    }

    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacation(id: &str, workspace_id: &str) -> Vacation {
        let mut vacation = Vacation::new(
            workspace_id,
            String::from("Japan"),
            String::from("Tokyo"),
            "alice",
        );
        vacation.id = id.to_string();
        vacation
    }

    #[test]
    fn put_then_get_round_trips() {
        let store = MemoryStore::new();
        store.put_vacation(vacation("v1", "ws-1"));

        let loaded = store.vacation("ws-1", "v1").unwrap();
        assert_eq!(loaded.id, "v1");
        assert!(store.vacation("ws-2", "v1").is_none());
    }

    #[test]
    fn put_is_last_write_wins() {
        let store = MemoryStore::new();
        store.put_vacation(vacation("v1", "ws-1"));

        let mut second = vacation("v1", "ws-1");
        second.name = String::from("Japan, revised");
        store.put_vacation(second);

        assert_eq!(store.vacation("ws-1", "v1").unwrap().name, "Japan, revised");
        assert_eq!(store.list_vacations("ws-1").len(), 1);
    }

    #[test]
    fn deleting_a_workspace_drops_its_vacations() {
        let store = MemoryStore::new();
        let workspace = Workspace::new(String::from("Summer"), "alice");
        let id = workspace.id.clone();
        store.put_workspace(workspace);
        store.put_vacation(vacation("v1", &id));

        assert!(store.delete_workspace(&id));
        assert!(store.workspace(&id).is_none());
        assert!(store.list_vacations(&id).is_empty());
    }

    #[test]
    fn writes_are_published_to_subscribers() {
        let store = MemoryStore::new();
        let mut feed = store.subscribe();

        store.put_vacation(vacation("v1", "ws-1"));
        store.delete_vacation("ws-1", "v1");

        assert_eq!(
            feed.try_recv().unwrap(),
            ChangeEvent::VacationUpserted {
                workspace_id: "ws-1".to_string(),
                vacation_id: "v1".to_string(),
            }
        );
        assert_eq!(
            feed.try_recv().unwrap(),
            ChangeEvent::VacationDeleted {
                workspace_id: "ws-1".to_string(),
                vacation_id: "v1".to_string(),
            }
        );
    }

    #[test]
    fn deleting_missing_documents_reports_false() {
        let store = MemoryStore::new();
        assert!(!store.delete_vacation("ws-1", "v1"));
        assert!(!store.delete_workspace("ws-1"));
    }
}
