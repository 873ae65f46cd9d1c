use chrono::{DateTime, Utc};
use entity::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role given to every account that does not ask for another one.
pub const DEFAULT_ROLE: &str = "Member";

#[derive(Serialize, Deserialize, Debug)]
pub struct RSignup {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RSignin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RSocialLogin {
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RUserCreate {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

/// Profile patch: `None` keeps the stored value.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RUserUpdate {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserRoleUpdate {
    pub role: String,
}

pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRes {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserModel> for UserRes {
    fn from(u: UserModel) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            phone: u.phone,
            avatar: u.avatar,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
