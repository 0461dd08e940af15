use chrono::Utc;

use crate::ResultEngine;

use super::Engine;

impl Engine {
    /// Create an empty custom category on a vacation.
    ///
    /// Returns the canonical (trimmed) category name.
    pub fn add_custom_category(
        &self,
        workspace_id: &str,
        vacation_id: &str,
        user_id: &str,
        name: &str,
    ) -> ResultEngine<String> {
        let mut vacation = self.require_vacation(workspace_id, vacation_id, user_id)?;
        let name = vacation.add_custom_category(name)?;
        vacation.updated_at = Utc::now();
        self.store.put_vacation(vacation);
        Ok(name)
    }

    /// Remove a custom category together with its items and selection.
    pub fn remove_custom_category(
        &self,
        workspace_id: &str,
        vacation_id: &str,
        user_id: &str,
        name: &str,
    ) -> ResultEngine<()> {
        let mut vacation = self.require_vacation(workspace_id, vacation_id, user_id)?;
        vacation.remove_custom_category(name)?;
        vacation.updated_at = Utc::now();
        self.store.put_vacation(vacation);
        Ok(())
    }
}
