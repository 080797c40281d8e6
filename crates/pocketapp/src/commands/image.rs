use crate::commands::{profile, CmdMessage, CmdResult};
use crate::media::{ImageSource, MediaPicker, Permission, PickResult};
use crate::store::ProfileForm;
use tracing::{debug, warn};

/// Sets the profile picture from `source`.
///
/// None of the failure paths are errors: a denied permission produces a
/// warning, a broken picker an error-level message, a cancelled pick nothing
/// at all. In every one of them the current picture is kept.
pub fn set_image<P: MediaPicker>(
    form: &mut ProfileForm,
    picker: &mut P,
    source: ImageSource,
) -> CmdResult {
    let mut result = CmdResult::default();

    let permission = match source {
        ImageSource::Camera => picker.request_camera_permission(),
        ImageSource::Library => picker.request_library_permission(),
    };
    debug!(?source, %permission, "media permission");

    if permission == Permission::Denied {
        let what = match source {
            ImageSource::Camera => "camera",
            ImageSource::Library => "photo library",
        };
        result.add_message(CmdMessage::warning(format!(
            "Please go to Settings and enable {} access for this app.",
            what
        )));
        return result;
    }

    let picked = match source {
        ImageSource::Camera => picker.capture_from_camera(),
        ImageSource::Library => picker.pick_from_library(),
    };

    match picked {
        Ok(PickResult::Picked(uri)) => {
            form.profile_mut().profile_image = Some(uri);
            result.add_message(CmdMessage::success("Profile picture updated!"));
            result.with_profile(profile::view(form))
        }
        Ok(PickResult::Cancelled) => {
            debug!(?source, "image pick cancelled");
            result
        }
        Err(e) => {
            warn!(?source, error = %e, "media picker failed");
            let msg = match source {
                ImageSource::Camera => "Failed to take photo. Please try again.",
                ImageSource::Library => "Failed to pick image. Please try again.",
            };
            result.add_message(CmdMessage::error(msg));
            result
        }
    }
}

/// Reports both permission states, e.g. `Media: granted, Camera: denied`.
pub fn permissions<P: MediaPicker>(picker: &mut P) -> CmdResult {
    let media = picker.request_library_permission();
    let camera = picker.request_camera_permission();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Media: {}, Camera: {}",
        media, camera
    )));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::media::fixtures::FakePicker;

    #[test]
    fn picked_uri_is_stored_verbatim() {
        let mut form = ProfileForm::new();
        let mut picker = FakePicker::returning("not a real uri ://");

        let result = set_image(&mut form, &mut picker, ImageSource::Library);

        assert_eq!(
            form.profile().profile_image.as_deref(),
            Some("not a real uri ://")
        );
        assert_eq!(result.messages[0].content, "Profile picture updated!");
    }

    #[test]
    fn camera_denied_keeps_image_and_warns() {
        let mut form = ProfileForm::new();
        form.profile_mut().profile_image = Some("file:///old.png".into());
        let mut picker =
            FakePicker::returning("file:///new.png").with_camera(Permission::Denied);

        let result = set_image(&mut form, &mut picker, ImageSource::Camera);

        assert_eq!(picker.picks, 0);
        assert_eq!(
            form.profile().profile_image.as_deref(),
            Some("file:///old.png")
        );
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("camera access"));
    }

    #[test]
    fn library_denied_mentions_photo_library() {
        let mut form = ProfileForm::new();
        let mut picker = FakePicker::returning("x").with_library(Permission::Denied);

        let result = set_image(&mut form, &mut picker, ImageSource::Library);

        assert!(result.messages[0].content.contains("photo library access"));
        assert!(form.profile().profile_image.is_none());
    }

    #[test]
    fn cancel_is_silent() {
        let mut form = ProfileForm::new();
        let mut picker = FakePicker::cancelling();

        let result = set_image(&mut form, &mut picker, ImageSource::Camera);

        assert_eq!(picker.picks, 1);
        assert!(result.is_silent());
        assert!(form.profile().profile_image.is_none());
    }

    #[test]
    fn picker_failure_is_reported_not_raised() {
        let mut form = ProfileForm::new();
        let mut picker = FakePicker::failing("device busy");

        let result = set_image(&mut form, &mut picker, ImageSource::Camera);

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(
            result.messages[0].content,
            "Failed to take photo. Please try again."
        );
        assert!(form.profile().profile_image.is_none());
    }

    #[test]
    fn image_can_change_while_viewing() {
        let mut form = ProfileForm::new();
        form.set_mode(crate::model::FormMode::Viewing);
        let mut picker = FakePicker::returning("file:///a.png");

        set_image(&mut form, &mut picker, ImageSource::Library);

        assert_eq!(form.profile().profile_image.as_deref(), Some("file:///a.png"));
    }

    #[test]
    fn permissions_reports_both() {
        let mut picker = FakePicker::returning("x").with_camera(Permission::Denied);
        let result = permissions(&mut picker);
        assert_eq!(result.messages[0].content, "Media: granted, Camera: denied");
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }
}
