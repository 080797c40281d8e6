use crate::model::{FormMode, UserProfile};

/// The profile being edited in a session, and whether it is being edited.
#[derive(Debug, Default)]
pub struct ProfileForm {
    profile: UserProfile,
    mode: FormMode,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: FormMode) {
        self.mode = mode;
    }

    pub fn is_editing(&self) -> bool {
        self.mode == FormMode::Editing
    }
}
