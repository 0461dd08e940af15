use chrono::{NaiveDate, Utc};

use crate::{EngineError, ResultEngine, Vacation};

use super::{Engine, normalize_required_name};

/// Input for creating a vacation.
#[derive(Clone, Debug, Default)]
pub struct VacationDraft {
    pub name: String,
    pub destination: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Partial update of a vacation's own fields. `None` leaves a field alone;
/// item lists and selections have their own operations.
#[derive(Clone, Debug, Default)]
pub struct VacationPatch {
    pub name: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Engine {
    /// Add a new vacation to a workspace.
    pub fn new_vacation(
        &self,
        workspace_id: &str,
        user_id: &str,
        draft: VacationDraft,
    ) -> ResultEngine<Vacation> {
        self.require_workspace(workspace_id, user_id)?;
        let name = normalize_required_name(&draft.name, "vacation")?;
        let destination = normalize_required_name(&draft.destination, "destination")?;

        let mut vacation = Vacation::new(workspace_id, name, destination, user_id);
        vacation.start_date = draft.start_date;
        vacation.end_date = draft.end_date;

        self.store.put_vacation(vacation.clone());
        Ok(vacation)
    }

    /// List a workspace's vacations, oldest first.
    pub fn vacations(&self, workspace_id: &str, user_id: &str) -> ResultEngine<Vec<Vacation>> {
        self.require_workspace(workspace_id, user_id)?;
        Ok(self.store.list_vacations(workspace_id))
    }

    /// Return a single vacation.
    pub fn vacation(
        &self,
        workspace_id: &str,
        vacation_id: &str,
        user_id: &str,
    ) -> ResultEngine<Vacation> {
        self.require_vacation(workspace_id, vacation_id, user_id)
    }

    /// Merge-update a vacation's own fields.
    ///
    /// Also sweeps selection entries orphaned by concurrent writers, so a
    /// returned document never carries a dangling reference.
    pub fn update_vacation(
        &self,
        workspace_id: &str,
        vacation_id: &str,
        user_id: &str,
        patch: VacationPatch,
    ) -> ResultEngine<Vacation> {
        let mut vacation = self.require_vacation(workspace_id, vacation_id, user_id)?;

        if let Some(name) = patch.name {
            vacation.name = normalize_required_name(&name, "vacation")?;
        }
        if let Some(destination) = patch.destination {
            vacation.destination = normalize_required_name(&destination, "destination")?;
        }
        if let Some(start_date) = patch.start_date {
            vacation.start_date = Some(start_date);
        }
        if let Some(end_date) = patch.end_date {
            vacation.end_date = Some(end_date);
        }

        vacation.prune_dangling_selections();
        vacation.updated_at = Utc::now();
        self.store.put_vacation(vacation.clone());
        Ok(vacation)
    }

    /// Delete a vacation.
    pub fn delete_vacation(
        &self,
        workspace_id: &str,
        vacation_id: &str,
        user_id: &str,
    ) -> ResultEngine<()> {
        self.require_workspace(workspace_id, user_id)?;
        if !self.store.delete_vacation(workspace_id, vacation_id) {
            return Err(EngineError::KeyNotFound("vacation not exists".to_string()));
        }
        Ok(())
    }
}
