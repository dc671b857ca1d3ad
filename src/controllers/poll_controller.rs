use axum::{http::StatusCode, Extension, Json};
use sqlx::SqlitePool;

use crate::dtos::requests::{CastVoteDTO, CreatePollDTO};
use crate::dtos::responses::{PollCreatedResponseDTO, PollListResponseDTO, VoteRecordedResponseDTO};
use crate::error::AppError;
use crate::repositories::poll_repository::PollRepository;

//*GET:: api/polls
pub async fn get_all_polls(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<PollListResponseDTO>, AppError> {
    let poll_repository = PollRepository::new(pool);
    let polls = poll_repository.get_all_polls().await?;

    Ok(Json(PollListResponseDTO { polls }))
}

//?POST:: api/polls
pub async fn create_new_poll(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<CreatePollDTO>,
) -> Result<(StatusCode, Json<PollCreatedResponseDTO>), AppError> {
    let title = payload
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("title is required".into()))?;
    let user_id = payload
        .user_id
        .ok_or_else(|| AppError::Validation("user_id is required".into()))?;
    let description = payload.description.as_deref().unwrap_or("");

    let poll_repository = PollRepository::new(pool);
    let poll_id = poll_repository
        .create_poll(title, description, &payload.options, user_id, payload.end_date)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PollCreatedResponseDTO {
            poll_id,
            message: String::from("Poll created"),
        }),
    ))
}

//?PUT:: api/polls
pub async fn cast_vote(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<CastVoteDTO>,
) -> Result<Json<VoteRecordedResponseDTO>, AppError> {
    let user_id = payload
        .user_id
        .ok_or_else(|| AppError::Validation("user_id is required".into()))?;
    let poll_id = payload
        .poll_id
        .ok_or_else(|| AppError::Validation("poll_id is required".into()))?;
    let option_id = payload
        .option_id
        .ok_or_else(|| AppError::Validation("option_id is required".into()))?;

    let poll_repository = PollRepository::new(pool);
    poll_repository.cast_vote(user_id, poll_id, option_id).await?;

    Ok(Json(VoteRecordedResponseDTO {
        message: String::from("Vote recorded"),
    }))
}
