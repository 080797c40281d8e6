use crate::commands::{clear, delete, CmdResult};
use crate::confirm::{Confirmation, PendingAction, PendingKind};
use crate::store::TodoStore;
use tracing::debug;

/// Applies `pending` if the user said yes, drops it otherwise.
pub fn run(store: &mut TodoStore, pending: PendingAction, answer: Confirmation) -> CmdResult {
    if answer == Confirmation::Cancel {
        debug!(kind = ?pending.kind(), "cancelled by user");
        return CmdResult::default();
    }

    match pending.kind() {
        PendingKind::Delete(id) => delete::apply(store, &id),
        PendingKind::ClearCompleted => clear::apply(store),
    }
}
