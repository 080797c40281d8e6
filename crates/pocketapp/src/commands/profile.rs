use crate::commands::{CmdMessage, CmdResult, ProfileView};
use crate::error::{Result, ValidationError};
use crate::model::{FormMode, ProfileField};
use crate::store::ProfileForm;
use tracing::debug;

pub fn view(form: &ProfileForm) -> ProfileView {
    ProfileView {
        profile: form.profile().clone(),
        mode: form.mode(),
    }
}

pub fn show(form: &ProfileForm) -> CmdResult {
    CmdResult::default().with_profile(view(form))
}

/// Stores `value` verbatim. Fields are only editable in edit mode.
pub fn update_field(form: &mut ProfileForm, field: ProfileField, value: &str) -> Result<CmdResult> {
    if !form.is_editing() {
        return Err(ValidationError::NotEditing.into());
    }
    *form.profile_mut().field_mut(field) = value.to_string();
    debug!(%field, "profile field updated");
    Ok(CmdResult::default().with_profile(view(form)))
}

/// Enters edit mode. Never validates.
pub fn edit(form: &mut ProfileForm) -> CmdResult {
    form.set_mode(FormMode::Editing);
    CmdResult::default().with_profile(view(form))
}

/// Flips between editing and viewing without validating or saving, like
/// the edit/close button on the form header.
pub fn toggle_mode(form: &mut ProfileForm) -> CmdResult {
    let next = match form.mode() {
        FormMode::Editing => FormMode::Viewing,
        FormMode::Viewing => FormMode::Editing,
    };
    form.set_mode(next);
    CmdResult::default().with_profile(view(form))
}

/// Checks required fields and switches to view mode.
///
/// Name is checked before email, so a form missing both reports the name.
pub fn save(form: &mut ProfileForm) -> Result<CmdResult> {
    let profile = form.profile();
    if profile.name.trim().is_empty() {
        return Err(ValidationError::MissingName.into());
    }
    if profile.email.trim().is_empty() {
        return Err(ValidationError::MissingEmail.into());
    }

    form.set_mode(FormMode::Viewing);
    debug!("profile saved");
    let mut result = CmdResult::default().with_profile(view(form));
    result.add_message(CmdMessage::success("Profile saved successfully!"));
    Ok(result)
}
