use crate::commands::CmdResult;
use crate::index::index_todos;
use crate::store::TodoStore;

pub fn run(store: &TodoStore) -> CmdResult {
    CmdResult::default().with_listed_todos(index_todos(store.items()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn lists_newest_first_with_indexes() {
        let fixture = StoreFixture::new().with_todo("old").with_todo("new");
        let result = run(&fixture.store);
        let listed: Vec<(usize, &str)> = result
            .listed_todos
            .iter()
            .map(|dt| (dt.index, dt.todo.text()))
            .collect();
        assert_eq!(listed, vec![(1, "new"), (2, "old")]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_lists_nothing() {
        let result = run(&TodoStore::new());
        assert!(result.listed_todos.is_empty());
    }
}
