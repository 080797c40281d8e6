//! # Confirmation Protocol
//!
//! Destructive operations (deleting a todo, clearing completed todos) never
//! run in one call. They go through two steps:
//!
//! 1. **Request**: the command layer inspects the store and hands back a
//!    [`PendingAction`] carrying the question to ask the user.
//! 2. **Resolve**: the caller answers with a [`Confirmation`]. Only
//!    [`Confirmation::Proceed`] applies the operation.
//!
//! A `PendingAction` is not `Clone` and resolving it consumes it, so one
//! answer can only ever apply one operation. Only the command layer can mint
//! one.
//!
//! UIs that can ask synchronously implement [`Confirmer`] and use the
//! `*_with` helpers on [`crate::api::PocketApi`].

use crate::model::TodoId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confirmation {
    Proceed,
    Cancel,
}

/// Something that can put a yes/no question to the user.
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> Confirmation;
}

/// What a [`PendingAction`] will do once confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKind {
    Delete(TodoId),
    ClearCompleted,
}

/// A destructive operation waiting for an answer.
#[derive(Debug)]
pub struct PendingAction {
    kind: PendingKind,
    title: &'static str,
    prompt: String,
}

impl PendingAction {
    pub(crate) fn new(kind: PendingKind, title: &'static str, prompt: String) -> Self {
        Self {
            kind,
            title,
            prompt,
        }
    }

    pub fn kind(&self) -> PendingKind {
        self.kind
    }

    /// Short heading for the question, e.g. "Delete Todo".
    pub fn title(&self) -> &str {
        self.title
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::{Confirmation, Confirmer};

    /// Answers every question the same way and remembers what it was asked.
    pub struct ScriptedConfirmer {
        pub answer: Confirmation,
        pub asked: Vec<String>,
    }

    impl ScriptedConfirmer {
        pub fn yes() -> Self {
            Self {
                answer: Confirmation::Proceed,
                asked: Vec::new(),
            }
        }

        pub fn no() -> Self {
            Self {
                answer: Confirmation::Cancel,
                asked: Vec::new(),
            }
        }
    }

    impl Confirmer for ScriptedConfirmer {
        fn confirm(&mut self, prompt: &str) -> Confirmation {
            self.asked.push(prompt.to_string());
            self.answer
        }
    }
}
