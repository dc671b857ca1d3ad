use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Request validation
    #[error("Missing or invalid field: {0}")]
    Validation(String),

    // User Related Errors
    #[error("User not found")]
    UserNotFound,
    #[error("Account is banned: {0}")]
    AccountBanned(String),

    // Database Errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    // Poll Errors
    #[error("Poll error: {0}")]
    Poll(#[from] PollsError),
}

#[derive(Error, Debug)]
pub enum PollsError {
    #[error("User has already voted on this poll")]
    AlreadyVoted,

    #[error("Option does not belong to this poll")]
    InvalidPollOption,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_string = self.to_string();
        let (status, error_message) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Invalid Request"),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "User Not Found"),
            AppError::AccountBanned(_) => (StatusCode::FORBIDDEN, "Account Banned"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database Error"),

            AppError::Poll(poll_err) => match poll_err {
                PollsError::AlreadyVoted => (StatusCode::BAD_REQUEST, "Already Voted"),
                PollsError::InvalidPollOption => (StatusCode::BAD_REQUEST, "Invalid Poll Option"),
            },
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Unexpected failure: {}", error_string);
        }

        let mut body = json!({
            "status": status.as_u16(),
            "message": error_message,
            "error": error_string,
            "timestamp": chrono::Utc::now()
        });

        // The banned response carries the reason so the client can show it
        if let AppError::AccountBanned(reason) = &self {
            body["banned"] = json!(true);
            body["banReason"] = json!(reason);
        }

        (status, Json(body)).into_response()
    }
}
