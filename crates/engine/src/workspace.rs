//! The `Workspace` is the shared container of vacations. A set of members
//! plans together inside one workspace; the workspace id doubles as the
//! invite code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// Holds the member list for a shared planning space.
///
/// Member ids are opaque strings handed over by the external identity
/// provider; the engine never interprets them beyond equality checks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub members: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Workspace {
    pub fn new(name: String, owner_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            owner_id: owner_id.to_string(),
            members: vec![owner_id.to_string()],
            created_at: Utc::now(),
        }
    }

    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|member| member == user_id)
    }

    pub fn is_owner(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }

    /// Adds a member; joining twice is a no-op.
    ///
    /// Returns `true` when the member was actually added.
    pub fn add_member(&mut self, user_id: &str) -> bool {
        if self.is_member(user_id) {
            return false;
        }
        self.members.push(user_id.to_string());
        true
    }

    /// Removes a member. The owner cannot be removed.
    pub fn remove_member(&mut self, user_id: &str) -> ResultEngine<()> {
        if self.is_owner(user_id) {
            return Err(EngineError::InvalidValue(
                "the workspace owner cannot be removed".to_string(),
            ));
        }
        match self.members.iter().position(|member| member == user_id) {
            Some(index) => {
                self.members.remove(index);
                Ok(())
            }
            None => Err(EngineError::KeyNotFound(user_id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> Workspace {
        Workspace::new(String::from("Summer 2026"), "alice")
    }

    #[test]
    fn owner_is_the_first_member() {
        let workspace = workspace();
        assert!(workspace.is_member("alice"));
        assert!(workspace.is_owner("alice"));
    }

    #[test]
    fn join_is_idempotent() {
        let mut workspace = workspace();
        assert!(workspace.add_member("bob"));
        assert!(!workspace.add_member("bob"));
        assert_eq!(workspace.members, vec!["alice", "bob"]);
    }

    #[test]
    fn remove_member() {
        let mut workspace = workspace();
        workspace.add_member("bob");
        workspace.remove_member("bob").unwrap();
        assert!(!workspace.is_member("bob"));
    }

    #[test]
    #[should_panic(expected = "InvalidValue(\"the workspace owner cannot be removed\")")]
    fn fail_remove_owner() {
        let mut workspace = workspace();
        workspace.remove_member("alice").unwrap();
    }

    #[test]
    #[should_panic(expected = "KeyNotFound(\"carol\")")]
    fn fail_remove_unknown_member() {
        let mut workspace = workspace();
        workspace.remove_member("carol").unwrap();
    }
}
