use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ValidationError};
use crate::model::TodoItem;
use crate::store::TodoStore;
use tracing::debug;

pub fn run(store: &mut TodoStore, text: &str) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyTodoText.into());
    }

    let item = TodoItem::new(text.to_string());
    debug!(id = %item.id(), "adding todo");
    store.insert_front(item.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Todo added: {}", item.text())));
    Ok(result.with_affected_todos(vec![item]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PocketError;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn prepends_open_item() {
        let mut fixture = StoreFixture::new().with_todo("older");
        let before = fixture.store.total_count();

        let result = run(&mut fixture.store, "Buy milk").unwrap();

        assert_eq!(fixture.store.total_count(), before + 1);
        let first = &fixture.store.items()[0];
        assert_eq!(first.text(), "Buy milk");
        assert!(!first.is_completed());
        assert_eq!(result.affected_todos[0].id(), first.id());
        assert_eq!(result.messages[0].content, "Todo added: Buy milk");
    }

    #[test]
    fn trims_text() {
        let mut store = TodoStore::new();
        run(&mut store, "  Call mom \t").unwrap();
        assert_eq!(store.items()[0].text(), "Call mom");
    }

    #[test]
    fn rejects_empty_and_blank() {
        let mut fixture = StoreFixture::new().with_todo("keep");
        for blank in ["", "   ", "\n\t"] {
            match run(&mut fixture.store, blank) {
                Err(PocketError::Validation(ValidationError::EmptyTodoText)) => {}
                other => panic!("Expected EmptyTodoText, got {:?}", other),
            }
        }
        assert_eq!(fixture.texts(), vec!["keep"]);
    }

    #[test]
    fn allows_duplicate_text() {
        let mut store = TodoStore::new();
        run(&mut store, "same").unwrap();
        run(&mut store, "same").unwrap();
        assert_eq!(store.total_count(), 2);
        assert_ne!(store.items()[0].id(), store.items()[1].id());
    }
}
