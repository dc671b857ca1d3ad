use chrono::NaiveDate;
use serde::Deserialize;

// Fields arrive as Option so a missing field surfaces as our own 400
// instead of a deserialization rejection.

#[derive(Deserialize, Clone)]
pub struct IdentifyDTO {
    pub email: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct CreatePollDTO {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    pub user_id: Option<i64>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Deserialize, Clone)]
pub struct CastVoteDTO {
    pub user_id: Option<i64>,
    pub poll_id: Option<i64>,
    pub option_id: Option<i64>,
}

#[derive(Deserialize, Clone)]
pub struct UpdateRoleDTO {
    pub user_id: Option<i64>,
    pub role: Option<String>,
}

#[derive(Deserialize, Clone)]
pub struct ModerateUserDTO {
    pub user_id: Option<i64>,
    /// "ban" or "unban"
    pub action: Option<String>,
    pub ban_reason: Option<String>,
}
