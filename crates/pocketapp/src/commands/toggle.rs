use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TodoId;
use crate::store::TodoStore;
use tracing::debug;

/// Flips `completed` on the todo with `id`. Unknown ids are ignored.
pub fn run(store: &mut TodoStore, id: &TodoId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(item) = store.toggle(id) else {
        debug!(%id, "toggle: no such todo, ignoring");
        return Ok(result);
    };

    let verb = if item.is_completed() { "Completed" } else { "Reopened" };
    result.add_message(CmdMessage::success(format!("{}: {}", verb, item.text())));
    Ok(result.with_affected_todos(vec![item.clone()]))
}
