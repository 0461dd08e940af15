use crate::{ResultEngine, aggregate, aggregate::CostSummary};

use super::Engine;

impl Engine {
    /// Compute the cost summary of a vacation from its current snapshot.
    pub fn cost_summary(
        &self,
        workspace_id: &str,
        vacation_id: &str,
        user_id: &str,
    ) -> ResultEngine<CostSummary> {
        let vacation = self.require_vacation(workspace_id, vacation_id, user_id)?;
        Ok(aggregate::cost_summary(&vacation))
    }
}
