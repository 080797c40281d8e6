use crate::error::{PocketError, Result};
use crate::model::{TodoId, TodoItem};

/// In-memory todo collection, newest first.
///
/// Counts are derived from the items every time they are asked for.
#[derive(Debug, Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| &item.id() == id)
    }

    /// Flips `completed` on the item with `id` and returns it. Nothing else
    /// about an item can change once it is in the store.
    pub fn toggle(&mut self, id: &TodoId) -> Option<&TodoItem> {
        let item = self.items.iter_mut().find(|item| &item.id() == id)?;
        item.flip_completed();
        Some(item)
    }

    /// Prepends `item`. Fails if its id is already present.
    pub fn insert_front(&mut self, item: TodoItem) -> Result<()> {
        if self.get(&item.id()).is_some() {
            return Err(PocketError::Api(format!("Duplicate todo id: {}", item.id())));
        }
        self.items.insert(0, item);
        Ok(())
    }

    pub fn remove(&mut self, id: &TodoId) -> Option<TodoItem> {
        let pos = self.items.iter().position(|item| &item.id() == id)?;
        Some(self.items.remove(pos))
    }

    /// Removes every item matching `pred`, keeping the others in order.
    /// Returns the removed items in their original order.
    pub fn remove_where<F>(&mut self, mut pred: F) -> Vec<TodoItem>
    where
        F: FnMut(&TodoItem) -> bool,
    {
        let (removed, kept): (Vec<TodoItem>, Vec<TodoItem>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| pred(item));
        self.items = kept;
        removed
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_completed()).count()
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_front_prepends() {
        let mut store = TodoStore::new();
        store.insert_front(TodoItem::new("a".into())).unwrap();
        store.insert_front(TodoItem::new("b".into())).unwrap();
        let texts: Vec<_> = store.items().iter().map(|i| i.text()).collect();
        assert_eq!(texts, vec!["b", "a"]);
    }

    #[test]
    fn test_insert_duplicate_id_rejected() {
        let mut store = TodoStore::new();
        let item = TodoItem::new("a".into());
        store.insert_front(item.clone()).unwrap();
        match store.insert_front(item) {
            Err(PocketError::Api(msg)) => assert!(msg.contains("Duplicate")),
            other => panic!("Expected Api error, got {:?}", other),
        }
        assert_eq!(store.total_count(), 1);
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut store = TodoStore::new();
        store.insert_front(TodoItem::new("a".into())).unwrap();
        assert!(store.remove(&TodoId::new()).is_none());
        assert_eq!(store.total_count(), 1);
    }

    #[test]
    fn test_remove_where_keeps_order() {
        let mut store = TodoStore::new();
        for text in ["e", "d", "c", "b", "a"] {
            store.insert_front(TodoItem::new(text.into())).unwrap();
        }
        let removed = store.remove_where(|item| item.text() == "b" || item.text() == "d");
        let removed: Vec<_> = removed.iter().map(|i| i.text()).collect();
        let kept: Vec<_> = store.items().iter().map(|i| i.text()).collect();
        assert_eq!(removed, vec!["b", "d"]);
        assert_eq!(kept, vec!["a", "c", "e"]);
    }

    #[test]
    fn test_counts_follow_state() {
        let mut store = TodoStore::new();
        assert!(store.is_empty());
        store.insert_front(TodoItem::new("a".into())).unwrap();
        let id = store.items()[0].id();
        assert_eq!(store.completed_count(), 0);
        store.toggle(&id);
        assert_eq!(store.completed_count(), 1);
        assert_eq!(store.total_count(), 1);
    }

    #[test]
    fn test_toggle_changes_only_completion() {
        let mut store = TodoStore::new();
        store.insert_front(TodoItem::new("a".into())).unwrap();
        store.insert_front(TodoItem::new("b".into())).unwrap();
        let before = store.items().to_vec();
        let b = before[0].id();

        let toggled = store.toggle(&b).unwrap();
        assert!(toggled.is_completed());
        assert_eq!(toggled.id(), b);
        assert_eq!(toggled.text(), "b");
        assert_eq!(toggled.created_at(), before[0].created_at());

        let ids: Vec<_> = store.items().iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec![before[0].id(), before[1].id()]);
        assert_eq!(store.items()[1], before[1]);
    }

    #[test]
    fn test_toggle_missing_is_none() {
        let mut store = TodoStore::new();
        store.insert_front(TodoItem::new("a".into())).unwrap();
        assert!(store.toggle(&TodoId::new()).is_none());
        assert_eq!(store.completed_count(), 0);
    }
}
