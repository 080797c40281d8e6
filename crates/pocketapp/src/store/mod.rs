//! # Session State
//!
//! This module holds the in-memory state a session works on. There is no
//! persistence: a session creates its stores empty and drops them on exit.
//!
//! ## Ownership
//!
//! Stores are plain owned values. The presentation layer (in practice the
//! [`crate::api::PocketApi`] a session builds) owns them and lends them to the
//! command functions by `&mut`. Nothing here is global, shared or locked.
//!
//! ## Implementations
//!
//! - [`TodoStore`]: ordered todo collection, newest first, unique ids.
//! - [`ProfileForm`]: a single [`crate::model::UserProfile`] plus its edit/view
//!   [`crate::model::FormMode`].
//!
//! The stores enforce structural invariants only (ordering, id uniqueness,
//! fixed identity and text once stored).
//! Input validation and user-facing messages belong to `commands/`.

mod profile_form;
mod todo_store;

pub use profile_form::ProfileForm;
pub use todo_store::TodoStore;

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{TodoId, TodoItem};

    pub struct StoreFixture {
        pub store: TodoStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: TodoStore::new(),
            }
        }

        /// Adds an open todo. Fixtures insert in call order, so the last one
        /// added ends up first.
        pub fn with_todo(mut self, text: &str) -> Self {
            self.store
                .insert_front(TodoItem::new(text.to_string()))
                .unwrap();
            self
        }

        pub fn with_completed_todo(mut self, text: &str) -> Self {
            let item = TodoItem::new(text.to_string());
            let id = item.id();
            self.store.insert_front(item).unwrap();
            self.store.toggle(&id);
            self
        }

        pub fn id_of(&self, text: &str) -> TodoId {
            self.store
                .items()
                .iter()
                .find(|item| item.text() == text)
                .map(|item| item.id())
                .unwrap()
        }

        pub fn texts(&self) -> Vec<String> {
            self.store
                .items()
                .iter()
                .map(|item| item.text().to_string())
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;

    #[test]
    fn test_fixtures_order_newest_first() {
        let fixture = StoreFixture::default()
            .with_todo("first")
            .with_completed_todo("second")
            .with_todo("third");

        assert_eq!(fixture.texts(), vec!["third", "second", "first"]);
        assert_eq!(fixture.store.completed_count(), 1);
        assert_eq!(fixture.store.total_count(), 3);
    }
}
