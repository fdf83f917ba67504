//! RemoveVanished action.
//!
//! Deletes vanished messages from `.ts` files. Used by `tscat clean`.

use super::operation::Operation;
use super::traits::Action;
use crate::issues::VanishedIssue;

pub struct RemoveVanished;

impl Action<VanishedIssue> for RemoveVanished {
    fn to_operations(issues: &[VanishedIssue]) -> Vec<Operation> {
        issues
            .iter()
            .map(|issue| Operation::DeleteVanished {
                context: issue.context.clone(),
            })
            .collect()
    }
}
