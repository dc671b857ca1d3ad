use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Poll {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub end_date: Option<NaiveDate>,
    /// References the id of the user who created the poll
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PollOption {
    pub id: i64,
    /// References the owning poll; options are deleted with it
    pub poll_id: i64,
    pub text: String,
    pub votes: i64,
}
