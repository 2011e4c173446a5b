use catalog::entity::User;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Public view of a user. The password is never serialized.
#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "3f2b8a0e-6c1d-4f7a-9b2e-1a5c7d9e0f11")]
    pub id: String,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.meta.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            is_admin: u.is_admin,
            created_at: u.meta.created_at,
            updated_at: u.meta.updated_at,
        }
    }
}

/// Owner summary embedded in place responses.
#[derive(Serialize, ToSchema)]
pub struct OwnerResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for OwnerResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.meta.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
        }
    }
}
