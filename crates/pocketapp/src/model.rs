use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identity of a todo. The only thing callers match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo. Only `completed` ever changes after creation, and only through
/// [`TodoStore::toggle`](crate::store::TodoStore::toggle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    id: TodoId,
    text: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Builds an open item. `text` is stored as given; callers trim and
    /// validate before calling.
    pub fn new(text: String) -> Self {
        Self {
            id: TodoId::new(),
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn flip_completed(&mut self) {
        self.completed = !self.completed;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub location: String,
    pub phone: String,
    pub profile_image: Option<String>,
}

impl UserProfile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Bio => &self.bio,
            ProfileField::Location => &self.location,
            ProfileField::Phone => &self.phone,
        }
    }

    pub fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Bio => &mut self.bio,
            ProfileField::Location => &mut self.location,
            ProfileField::Phone => &mut self.phone,
        }
    }
}

/// The editable text fields of a [`UserProfile`], in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    Name,
    Email,
    Bio,
    Location,
    Phone,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Bio,
        ProfileField::Location,
        ProfileField::Phone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Full Name",
            ProfileField::Email => "Email",
            ProfileField::Bio => "Bio",
            ProfileField::Location => "Location",
            ProfileField::Phone => "Phone",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Bio => "bio",
            ProfileField::Location => "location",
            ProfileField::Phone => "phone",
        };
        f.write_str(name)
    }
}

impl FromStr for ProfileField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .into_iter()
            .find(|field| field.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Editing,
    Viewing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_is_open() {
        let item = TodoItem::new("Buy milk".into());
        assert!(!item.is_completed());
        assert_eq!(item.text(), "Buy milk");
    }

    #[test]
    fn ids_are_unique() {
        let a = TodoItem::new("a".into());
        let b = TodoItem::new("a".into());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn profile_field_parses_case_insensitively() {
        assert_eq!("Email".parse::<ProfileField>().unwrap(), ProfileField::Email);
        assert_eq!(" phone ".parse::<ProfileField>().unwrap(), ProfileField::Phone);
        assert!(matches!(
            "avatar".parse::<ProfileField>(),
            Err(ValidationError::UnknownField(_))
        ));
    }

    #[test]
    fn field_mut_targets_the_right_slot() {
        let mut profile = UserProfile::default();
        *profile.field_mut(ProfileField::Location) = "Lisbon".into();
        assert_eq!(profile.location, "Lisbon");
        assert_eq!(profile.field(ProfileField::Location), "Lisbon");
        assert_eq!(profile.field(ProfileField::Name), "");
    }

    #[test]
    fn form_starts_in_edit_mode() {
        assert_eq!(FormMode::default(), FormMode::Editing);
    }
}
