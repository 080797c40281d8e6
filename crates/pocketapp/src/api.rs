//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for a UI. One [`PocketApi`] is one session: it owns a
//! [`TodoStore`] and a [`ProfileForm`], both created empty, and drops them
//! with itself.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the command functions
//! - **Normalizes inputs**: display indexes (`"2"`) become [`TodoId`]s
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## Destructive Operations
//!
//! Two ways in, same semantics:
//!
//! - Token style: [`PocketApi::request_delete`] /
//!   [`PocketApi::request_clear_completed`] hand back a
//!   [`PendingAction`]; the UI asks however it likes and calls
//!   [`PocketApi::resolve`].
//! - Callback style: [`PocketApi::delete_with`] /
//!   [`PocketApi::clear_completed_with`] take a [`Confirmer`] and do both steps.
//!
//! ## Testing Strategy
//!
//! Tests here check dispatch and index normalization, plus the end-to-end
//! scenarios a UI would drive. Command logic is tested in `commands/`.

use crate::commands::clear::ClearRequest;
use crate::commands::counts::Counts;
use crate::commands::{self, CmdResult};
use crate::confirm::{Confirmation, Confirmer, PendingAction};
use crate::error::Result;
use crate::index::{parse_index, resolve_index};
use crate::media::{ImageSource, MediaPicker};
use crate::model::{ProfileField, TodoId};
use crate::store::{ProfileForm, TodoStore};

#[derive(Debug, Default)]
pub struct PocketApi {
    todos: TodoStore,
    profile: ProfileForm,
}

impl PocketApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &TodoStore {
        &self.todos
    }

    pub fn profile(&self) -> &ProfileForm {
        &self.profile
    }

    // --- Todos ---

    pub fn add_todo(&mut self, text: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.todos, text)
    }

    pub fn toggle_todo(&mut self, id: &TodoId) -> Result<CmdResult> {
        commands::toggle::run(&mut self.todos, id)
    }

    pub fn list_todos(&self) -> CmdResult {
        commands::list::run(&self.todos)
    }

    pub fn counts(&self) -> Counts {
        commands::counts::run(&self.todos)
    }

    pub fn request_delete(&self, id: TodoId) -> PendingAction {
        commands::delete::request(id)
    }

    pub fn request_clear_completed(&self) -> ClearRequest {
        commands::clear::request(&self.todos)
    }

    pub fn resolve(&mut self, pending: PendingAction, answer: Confirmation) -> CmdResult {
        commands::resolve::run(&mut self.todos, pending, answer)
    }

    pub fn delete_with<C: Confirmer>(&mut self, id: TodoId, confirmer: &mut C) -> CmdResult {
        let pending = self.request_delete(id);
        let answer = confirmer.confirm(pending.prompt());
        self.resolve(pending, answer)
    }

    pub fn clear_completed_with<C: Confirmer>(&mut self, confirmer: &mut C) -> CmdResult {
        match self.request_clear_completed() {
            ClearRequest::NothingToClear(result) => result,
            ClearRequest::Pending(pending) => {
                let answer = confirmer.confirm(pending.prompt());
                self.resolve(pending, answer)
            }
        }
    }

    /// Maps a user-typed display index (`"2"`, `"#2"`) to the id currently
    /// at that position.
    pub fn todo_id_at(&self, index: &str) -> Result<TodoId> {
        let n = parse_index(index)?;
        resolve_index(self.todos.items(), n)
    }

    // --- Profile ---

    pub fn show_profile(&self) -> CmdResult {
        commands::profile::show(&self.profile)
    }

    pub fn update_profile_field(&mut self, field: ProfileField, value: &str) -> Result<CmdResult> {
        commands::profile::update_field(&mut self.profile, field, value)
    }

    pub fn edit_profile(&mut self) -> CmdResult {
        commands::profile::edit(&mut self.profile)
    }

    pub fn toggle_profile_mode(&mut self) -> CmdResult {
        commands::profile::toggle_mode(&mut self.profile)
    }

    pub fn save_profile(&mut self) -> Result<CmdResult> {
        commands::profile::save(&mut self.profile)
    }

    pub fn set_profile_image<P: MediaPicker>(
        &mut self,
        picker: &mut P,
        source: ImageSource,
    ) -> CmdResult {
        commands::image::set_image(&mut self.profile, picker, source)
    }

    pub fn media_permissions<P: MediaPicker>(&self, picker: &mut P) -> CmdResult {
        commands::image::permissions(picker)
    }
}
