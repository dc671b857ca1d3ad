use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::info;

use crate::dtos::responses::{PollOptionResponseDTO, PollResponseDTO};
use crate::error::{AppError, PollsError};
use crate::models::poll::{Poll, PollOption};

pub struct PollRepository {
    pool: SqlitePool,
}

impl PollRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts the poll and all its options in one transaction, so a poll
    /// can never be observed with a partial option set. Option ids follow
    /// insertion order, which is the caller's display order.
    pub async fn create_poll(
        &self,
        title: &str,
        description: &str,
        options: &[String],
        created_by: i64,
        end_date: Option<NaiveDate>,
    ) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await?;

        let (poll_id,): (i64,) = sqlx::query_as(
            "INSERT INTO polls (title, description, status, end_date, created_by, created_at)
             VALUES ($1, $2, 'active', $3, $4, $5)
             RETURNING id",
        )
        .bind(title)
        .bind(description)
        .bind(end_date)
        .bind(created_by)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        for text in options {
            sqlx::query("INSERT INTO poll_options (poll_id, option_text, votes) VALUES ($1, $2, 0)")
                .bind(poll_id)
                .bind(text)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!("Poll {} created with {} options", poll_id, options.len());
        Ok(poll_id)
    }

    /// Fetches polls and options separately and groups in memory. Polls are
    /// newest first, options in id order within their poll; a poll with no
    /// options still shows up with an empty list.
    pub async fn get_all_polls(&self) -> Result<Vec<PollResponseDTO>, AppError> {
        let polls = sqlx::query_as::<_, Poll>(
            "SELECT id, title, description, status, end_date, created_by, created_at
             FROM polls
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let options = sqlx::query_as::<_, PollOption>(
            "SELECT id, poll_id, option_text AS text, votes
             FROM poll_options
             ORDER BY poll_id, id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut options_by_poll: HashMap<i64, Vec<PollOption>> = HashMap::new();
        for option in options {
            options_by_poll.entry(option.poll_id).or_default().push(option);
        }

        let polls = polls
            .into_iter()
            .map(|poll| {
                let options = options_by_poll.remove(&poll.id).unwrap_or_default();
                let total_votes = options.iter().map(|o| o.votes).sum();
                PollResponseDTO {
                    id: poll.id.to_string(),
                    title: poll.title,
                    description: poll.description,
                    status: poll.status,
                    end_date: poll.end_date.map(|d| d.to_string()),
                    options: options
                        .into_iter()
                        .map(|o| PollOptionResponseDTO {
                            id: o.id.to_string(),
                            text: o.text,
                            votes: o.votes,
                        })
                        .collect(),
                    total_votes,
                }
            })
            .collect();

        Ok(polls)
    }

    /// Records a vote and bumps the option tally as one transaction.
    ///
    /// The (user_id, poll_id) primary key on user_votes is the authority on
    /// double voting: under concurrent casts for the same pair, one insert
    /// wins and the rest fail with a uniqueness violation, which we report
    /// as AlreadyVoted. The tally update is keyed on both the option and
    /// the poll, so a vote naming an option from another poll rolls back.
    pub async fn cast_vote(
        &self,
        user_id: i64,
        poll_id: i64,
        option_id: i64,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO user_votes (user_id, poll_id, option_id, created_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(poll_id)
        .bind(option_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Poll(PollsError::AlreadyVoted)
            }
            _ => AppError::Database(e),
        })?;

        let updated = sqlx::query(
            "UPDATE poll_options SET votes = votes + 1 WHERE id = $1 AND poll_id = $2",
        )
        .bind(option_id)
        .bind(poll_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::Poll(PollsError::InvalidPollOption));
        }

        tx.commit().await?;

        info!(
            "Vote recorded: user {} -> option {} on poll {}",
            user_id, option_id, poll_id
        );
        Ok(())
    }
}
