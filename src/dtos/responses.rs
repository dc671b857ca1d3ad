use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::User;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponseDTO {
    pub id: i64,
    pub email: String,
    pub is_owner: bool,
    pub banned: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for IdentityResponseDTO {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_owner: user.is_owner,
            banned: user.banned,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PollListResponseDTO {
    pub polls: Vec<PollResponseDTO>,
}

// Poll and option ids are serialized as strings; that is the contract the
// web client was written against.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollResponseDTO {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub end_date: Option<String>,
    pub options: Vec<PollOptionResponseDTO>,
    pub total_votes: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PollOptionResponseDTO {
    pub id: String,
    pub text: String,
    pub votes: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PollCreatedResponseDTO {
    pub poll_id: i64,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoteRecordedResponseDTO {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponseDTO {
    pub users: Vec<UserAdminResponseDTO>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAdminResponseDTO {
    pub id: i64,
    pub email: String,
    pub role: String,
    pub is_owner: bool,
    pub banned: bool,
    pub ban_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserAdminResponseDTO {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            is_owner: user.is_owner,
            banned: user.banned,
            ban_reason: user.ban_reason,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoleUpdatedResponseDTO {
    pub id: i64,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModerationResponseDTO {
    pub id: i64,
    pub email: String,
    pub banned: bool,
}
