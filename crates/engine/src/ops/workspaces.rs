use crate::{EngineError, ResultEngine, Workspace};

use super::{Engine, normalize_required_name};

impl Engine {
    /// Add a new workspace owned by the calling user.
    pub fn new_workspace(&self, name: &str, user_id: &str) -> ResultEngine<Workspace> {
        let name = normalize_required_name(name, "workspace")?;
        let workspace = Workspace::new(name, user_id);
        self.store.put_workspace(workspace.clone());
        Ok(workspace)
    }

    /// Return a workspace the calling user is a member of.
    pub fn workspace(&self, workspace_id: &str, user_id: &str) -> ResultEngine<Workspace> {
        self.require_workspace(workspace_id, user_id)
    }

    /// Join a workspace by id (the id doubles as the invite code).
    ///
    /// Joining a workspace the user already belongs to is a no-op.
    pub fn join_workspace(&self, workspace_id: &str, user_id: &str) -> ResultEngine<Workspace> {
        let mut workspace = self
            .store
            .workspace(workspace_id)
            .ok_or_else(|| EngineError::KeyNotFound("workspace not exists".to_string()))?;
        if workspace.add_member(user_id) {
            self.store.put_workspace(workspace.clone());
        }
        Ok(workspace)
    }

    /// List the member ids of a workspace.
    pub fn list_workspace_members(
        &self,
        workspace_id: &str,
        user_id: &str,
    ) -> ResultEngine<Vec<String>> {
        let workspace = self.require_workspace(workspace_id, user_id)?;
        Ok(workspace.members)
    }

    /// Remove a member from a workspace.
    ///
    /// Only the owner may remove other members; any member may remove
    /// themselves (leave). The owner cannot be removed.
    pub fn remove_workspace_member(
        &self,
        workspace_id: &str,
        member_id: &str,
        user_id: &str,
    ) -> ResultEngine<()> {
        let mut workspace = self.require_workspace(workspace_id, user_id)?;
        if !workspace.is_owner(user_id) && member_id != user_id {
            return Err(EngineError::Forbidden(
                "only the owner can remove other members".to_string(),
            ));
        }
        workspace.remove_member(member_id)?;
        self.store.put_workspace(workspace);
        Ok(())
    }

    /// Delete a workspace and everything in it. Owner only.
    pub fn delete_workspace(&self, workspace_id: &str, user_id: &str) -> ResultEngine<()> {
        let workspace = self.require_workspace(workspace_id, user_id)?;
        if !workspace.is_owner(user_id) {
            return Err(EngineError::Forbidden(
                "only the owner can delete a workspace".to_string(),
            ));
        }
        self.store.delete_workspace(workspace_id);
        Ok(())
    }
}
