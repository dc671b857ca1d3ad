use axum::{Extension, Json};
use sqlx::SqlitePool;
use tracing::info;

use crate::dtos::requests::IdentifyDTO;
use crate::dtos::responses::IdentityResponseDTO;
use crate::error::AppError;
use crate::repositories::user_repository::{UserRepository, DEFAULT_BAN_REASON};

//?POST:: api/auth
/// Resolves a caller-asserted email to a user record, creating it on first
/// login. Banned accounts are rejected here with the stored reason; there
/// is no password or token, the email alone is the identity.
pub async fn identify(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<IdentifyDTO>,
) -> Result<Json<IdentityResponseDTO>, AppError> {
    let email = payload
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::Validation("email is required".into()))?;

    let user_repository = UserRepository::new(pool);
    let user = user_repository.resolve_or_create(email).await?;

    if user.banned {
        let reason = user
            .ban_reason
            .unwrap_or_else(|| DEFAULT_BAN_REASON.to_string());
        return Err(AppError::AccountBanned(reason));
    }

    info!("Identity resolved for {} (id {})", user.email, user.id);
    Ok(Json(user.into()))
}
