//! # Media Capability
//!
//! Profile pictures come from outside the library: a photo library or a
//! camera owned by the host platform. [`MediaPicker`] is the seam. The library
//! never inspects what comes back beyond "a URI", "cancelled" or "failed".

use crate::error::Result;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Granted,
    Denied,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::Granted => f.write_str("granted"),
            Permission::Denied => f.write_str("denied"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    Picked(String),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Camera,
    Library,
}

impl std::str::FromStr for ImageSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "camera" => Ok(ImageSource::Camera),
            "library" | "photos" => Ok(ImageSource::Library),
            other => Err(format!("Unknown image source: {}", other)),
        }
    }
}

/// Host-provided access to the photo library and camera.
///
/// `pick_from_library` and `capture_from_camera` are only called after the
/// matching permission request returned [`Permission::Granted`]. An `Err` from
/// either means the picker itself broke; the user may simply try again.
pub trait MediaPicker {
    fn request_library_permission(&mut self) -> Permission;
    fn request_camera_permission(&mut self) -> Permission;
    fn pick_from_library(&mut self) -> Result<PickResult>;
    fn capture_from_camera(&mut self) -> Result<PickResult>;
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::PocketError;

    /// Canned picker: fixed permissions and a fixed outcome for both sources.
    pub struct FakePicker {
        pub library: Permission,
        pub camera: Permission,
        pub outcome: std::result::Result<PickResult, String>,
        pub picks: usize,
    }

    impl FakePicker {
        pub fn returning(uri: &str) -> Self {
            Self {
                library: Permission::Granted,
                camera: Permission::Granted,
                outcome: Ok(PickResult::Picked(uri.to_string())),
                picks: 0,
            }
        }

        pub fn cancelling() -> Self {
            Self {
                outcome: Ok(PickResult::Cancelled),
                ..Self::returning("")
            }
        }

        pub fn failing(reason: &str) -> Self {
            Self {
                outcome: Err(reason.to_string()),
                ..Self::returning("")
            }
        }

        pub fn with_camera(mut self, permission: Permission) -> Self {
            self.camera = permission;
            self
        }

        pub fn with_library(mut self, permission: Permission) -> Self {
            self.library = permission;
            self
        }

        fn pick(&mut self) -> Result<PickResult> {
            self.picks += 1;
            self.outcome.clone().map_err(PocketError::Media)
        }
    }

    impl MediaPicker for FakePicker {
        fn request_library_permission(&mut self) -> Permission {
            self.library
        }

        fn request_camera_permission(&mut self) -> Permission {
            self.camera
        }

        fn pick_from_library(&mut self) -> Result<PickResult> {
            self.pick()
        }

        fn capture_from_camera(&mut self) -> Result<PickResult> {
            self.pick()
        }
    }
}
