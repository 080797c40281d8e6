use crate::commands::{CmdMessage, CmdResult};
use crate::confirm::{PendingAction, PendingKind};
use crate::model::TodoId;
use crate::store::TodoStore;
use tracing::debug;

/// Asks for confirmation before deleting `id`.
///
/// The question is the same whether or not `id` exists; an unknown id simply
/// deletes nothing once confirmed.
pub fn request(id: TodoId) -> PendingAction {
    PendingAction::new(
        PendingKind::Delete(id),
        "Delete Todo",
        "Are you sure you want to delete this todo?".to_string(),
    )
}

/// Removes `id`. Only reachable through a confirmed [`PendingAction`].
pub(super) fn apply(store: &mut TodoStore, id: &TodoId) -> CmdResult {
    let mut result = CmdResult::default();
    match store.remove(id) {
        Some(item) => {
            debug!(%id, "deleted todo");
            result.add_message(CmdMessage::success(format!("Deleted: {}", item.text())));
            result.with_affected_todos(vec![item])
        }
        None => {
            debug!(%id, "delete: no such todo, ignoring");
            result
        }
    }
}
