use crate::commands::{CmdMessage, CmdResult};
use crate::confirm::{PendingAction, PendingKind};
use crate::store::TodoStore;
use tracing::debug;

pub const NOTHING_TO_CLEAR: &str = "No completed todos to clear";

/// Outcome of asking to clear completed todos.
#[derive(Debug)]
pub enum ClearRequest {
    /// Nothing is completed. Not an error; tell the user and stop.
    NothingToClear(CmdResult),
    /// Ask the user, then resolve.
    Pending(PendingAction),
}

pub fn request(store: &TodoStore) -> ClearRequest {
    let completed = store.completed_count();
    if completed == 0 {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(NOTHING_TO_CLEAR));
        return ClearRequest::NothingToClear(result);
    }

    ClearRequest::Pending(PendingAction::new(
        PendingKind::ClearCompleted,
        "Clear Completed",
        format!("Delete {} completed todo(s)?", completed),
    ))
}

/// Removes every todo that is completed right now.
///
/// The set is evaluated at apply time, not at request time: a todo completed
/// while the question was open is cleared too.
pub(super) fn apply(store: &mut TodoStore) -> CmdResult {
    let removed = store.remove_where(|item| item.is_completed());
    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::info(NOTHING_TO_CLEAR));
        return result;
    }
    debug!(count = removed.len(), "cleared completed todos");
    result.add_message(CmdMessage::success(format!(
        "Cleared {} completed todo(s)",
        removed.len()
    )));
    result.with_affected_todos(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn nothing_completed_is_informational() {
        let fixture = StoreFixture::new().with_todo("a").with_todo("b");

        match request(&fixture.store) {
            ClearRequest::NothingToClear(result) => {
                assert_eq!(result.messages.len(), 1);
                assert_eq!(result.messages[0].level, MessageLevel::Info);
                assert_eq!(result.messages[0].content, NOTHING_TO_CLEAR);
            }
            ClearRequest::Pending(_) => panic!("Expected NothingToClear"),
        }
        assert_eq!(fixture.store.total_count(), 2);
    }

    #[test]
    fn empty_store_is_informational() {
        let store = TodoStore::new();
        assert!(matches!(request(&store), ClearRequest::NothingToClear(_)));
    }

    #[test]
    fn prompt_counts_completed() {
        let fixture = StoreFixture::new()
            .with_completed_todo("a")
            .with_todo("b")
            .with_completed_todo("c");

        match request(&fixture.store) {
            ClearRequest::Pending(pending) => {
                assert_eq!(pending.kind(), PendingKind::ClearCompleted);
                assert_eq!(pending.prompt(), "Delete 2 completed todo(s)?");
            }
            ClearRequest::NothingToClear(_) => panic!("Expected Pending"),
        }
    }

    #[test]
    fn apply_leaves_only_open_items() {
        // Inserted c, b, a so the list reads A, B, C.
        let mut fixture = StoreFixture::new()
            .with_completed_todo("C")
            .with_todo("B")
            .with_completed_todo("A");

        let result = apply(&mut fixture.store);

        assert_eq!(fixture.texts(), vec!["B"]);
        let removed: Vec<_> = result.affected_todos.iter().map(|t| t.text()).collect();
        assert_eq!(removed, vec!["A", "C"]);
        assert_eq!(result.messages[0].content, "Cleared 2 completed todo(s)");
    }

    #[test]
    fn apply_preserves_order_of_remainder() {
        let mut fixture = StoreFixture::new()
            .with_todo("e")
            .with_completed_todo("d")
            .with_todo("c")
            .with_completed_todo("b")
            .with_todo("a");

        apply(&mut fixture.store);

        assert_eq!(fixture.texts(), vec!["a", "c", "e"]);
    }
}
