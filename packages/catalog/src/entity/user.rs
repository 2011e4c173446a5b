use serde::Deserialize;

use super::validation::{Violations, is_valid_email, is_valid_text};
use super::{Attribute, Entity, EntityMeta};
use crate::error::Result;

pub const NAME_MAX_CHARS: usize = 50;

/// Payload for registering a user.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct NewUser {
    /// First name (1-50 characters).
    #[schema(example = "Alice")]
    #[serde(default)]
    pub first_name: String,
    /// Last name (1-50 characters).
    #[schema(example = "Martin")]
    #[serde(default)]
    pub last_name: String,
    /// Unique email address.
    #[schema(example = "alice@example.com")]
    #[serde(default)]
    pub email: String,
    /// Opaque password, stored as given.
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Updatable user fields. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub meta: EntityMeta,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

impl User {
    /// Build a validated user with a fresh identity.
    pub fn new(data: NewUser) -> Result<Self> {
        let user = Self {
            meta: EntityMeta::new(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            password: data.password,
            is_admin: data.is_admin,
        };
        user.validate()?;
        Ok(user)
    }
}

impl Entity for User {
    type Patch = UserPatch;

    const KIND: &'static str = "User";

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn attribute(&self, name: &str) -> Option<Attribute<'_>> {
        match name {
            "id" => Some(Attribute::Text(&self.meta.id)),
            "first_name" => Some(Attribute::Text(&self.first_name)),
            "last_name" => Some(Attribute::Text(&self.last_name)),
            "email" => Some(Attribute::Text(&self.email)),
            "is_admin" => Some(Attribute::Flag(self.is_admin)),
            _ => None,
        }
    }

    fn validate(&self) -> Result<()> {
        let mut v = Violations::new();
        v.check(
            is_valid_text(&self.first_name, NAME_MAX_CHARS),
            "First name must be 1-50 characters",
        );
        v.check(
            is_valid_text(&self.last_name, NAME_MAX_CHARS),
            "Last name must be 1-50 characters",
        );
        v.check(is_valid_email(&self.email), "Email must be a valid address");
        v.into_result()
    }

    fn merge(&mut self, patch: UserPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(is_admin) = patch.is_admin {
            self.is_admin = is_admin;
        }
    }
}
