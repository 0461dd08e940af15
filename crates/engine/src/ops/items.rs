use chrono::Utc;

use serde_json::{Map, Value};

use crate::{CategoryKey, Item, ResultEngine};

use super::Engine;

impl Engine {
    /// Append an item to a category of a vacation.
    pub fn add_item(
        &self,
        workspace_id: &str,
        vacation_id: &str,
        user_id: &str,
        key: &CategoryKey,
        item: Item,
    ) -> ResultEngine<Item> {
        let mut vacation = self.require_vacation(workspace_id, vacation_id, user_id)?;
        let added = vacation.add_item(key, item)?.clone();
        vacation.updated_at = Utc::now();
        self.store.put_vacation(vacation);
        Ok(added)
    }

    /// Merge field updates into an existing item.
    pub fn update_item(
        &self,
        workspace_id: &str,
        vacation_id: &str,
        user_id: &str,
        key: &CategoryKey,
        item_id: &str,
        updates: Map<String, Value>,
    ) -> ResultEngine<Item> {
        let mut vacation = self.require_vacation(workspace_id, vacation_id, user_id)?;
        let updated = vacation.update_item(key, item_id, updates)?.clone();
        vacation.updated_at = Utc::now();
        self.store.put_vacation(vacation);
        Ok(updated)
    }

    /// Delete an item; a selection pointing at it is cleared in the same
    /// document write.
    pub fn delete_item(
        &self,
        workspace_id: &str,
        vacation_id: &str,
        user_id: &str,
        key: &CategoryKey,
        item_id: &str,
    ) -> ResultEngine<()> {
        let mut vacation = self.require_vacation(workspace_id, vacation_id, user_id)?;
        vacation.remove_item(key, item_id)?;
        vacation.updated_at = Utc::now();
        self.store.put_vacation(vacation);
        Ok(())
    }

    /// Set, toggle or clear the selection of a category.
    ///
    /// Returns the selection in effect after the call.
    pub fn select_item(
        &self,
        workspace_id: &str,
        vacation_id: &str,
        user_id: &str,
        key: &CategoryKey,
        item_id: Option<&str>,
    ) -> ResultEngine<Option<String>> {
        let mut vacation = self.require_vacation(workspace_id, vacation_id, user_id)?;
        let selected = vacation.select_item(key, item_id)?;
        vacation.updated_at = Utc::now();
        self.store.put_vacation(vacation);
        Ok(selected)
    }
}
