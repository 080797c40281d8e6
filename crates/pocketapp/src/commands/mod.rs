//! # Command Layer
//!
//! This module contains the **core business logic** of pocket. Each command
//! lives in its own submodule as plain functions over the session stores.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate user input and reject it with [`crate::error::ValidationError`]
//! - Mutate [`TodoStore`](crate::store::TodoStore) and
//!   [`ProfileForm`](crate::store::ProfileForm)
//! - Return structured [`CmdResult`] values with leveled messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr or terminal concerns
//! - **Asking the user**: destructive commands return a
//!   [`PendingAction`](crate::confirm::PendingAction) and the UI asks
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Outcomes
//!
//! Every command ends in exactly one of:
//! - `Ok` with success messages (or none): state changed
//! - `Err(PocketError::Validation(_))`: bad input, nothing changed
//! - `Ok` with an info message: nothing to do, nothing changed
//!
//! ## Command Modules
//!
//! - [`add`]: Create a todo
//! - [`toggle`]: Flip a todo's completed flag
//! - [`delete`]: Request deletion of a todo
//! - [`clear`]: Request removal of all completed todos
//! - [`resolve`]: Apply or drop a pending destructive action
//! - [`list`]: Indexed listing
//! - [`counts`]: Derived completed/total counts
//! - [`profile`]: Field edits, mode switching, save
//! - [`image`]: Profile picture via a media picker

use crate::index::DisplayTodo;
use crate::model::{FormMode, TodoItem, UserProfile};
use serde::Serialize;

pub mod add;
pub mod clear;
pub mod counts;
pub mod delete;
pub mod image;
pub mod list;
pub mod profile;
pub mod resolve;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The profile as a UI should show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub profile: UserProfile,
    pub mode: FormMode,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_todos: Vec<TodoItem>,
    pub listed_todos: Vec<DisplayTodo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileView>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<TodoItem>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<DisplayTodo>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn with_profile(mut self, profile: ProfileView) -> Self {
        self.profile = Some(profile);
        self
    }

    /// True when the command changed nothing and said nothing.
    pub fn is_silent(&self) -> bool {
        self.affected_todos.is_empty() && self.messages.is_empty()
    }
}
