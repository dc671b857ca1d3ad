use axum::{Extension, Json};
use sqlx::SqlitePool;

use crate::dtos::requests::{ModerateUserDTO, UpdateRoleDTO};
use crate::dtos::responses::{ModerationResponseDTO, RoleUpdatedResponseDTO, UserListResponseDTO};
use crate::error::AppError;
use crate::repositories::user_repository::UserRepository;

//*GET:: api/users
pub async fn list_users(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<UserListResponseDTO>, AppError> {
    let user_repository = UserRepository::new(pool);
    let users = user_repository.list().await?;

    Ok(Json(UserListResponseDTO {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

//?PATCH:: api/users
/// Changes a user's role. Any non-empty role string is accepted and there
/// is no self-protection; only a missing target is an error.
pub async fn update_user_role(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<UpdateRoleDTO>,
) -> Result<Json<RoleUpdatedResponseDTO>, AppError> {
    let user_id = payload
        .user_id
        .ok_or_else(|| AppError::Validation("user_id is required".into()))?;
    let role = payload
        .role
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| AppError::Validation("role is required".into()))?;

    let user_repository = UserRepository::new(pool);
    let user = user_repository.set_role(user_id, role).await?;

    Ok(Json(RoleUpdatedResponseDTO {
        id: user.id,
        email: user.email,
        role: user.role,
    }))
}

//?POST:: api/users
pub async fn moderate_user(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<ModerateUserDTO>,
) -> Result<Json<ModerationResponseDTO>, AppError> {
    let user_id = payload
        .user_id
        .ok_or_else(|| AppError::Validation("user_id is required".into()))?;
    let action = payload
        .action
        .as_deref()
        .ok_or_else(|| AppError::Validation("action is required".into()))?;

    let user_repository = UserRepository::new(pool);
    let user = match action {
        "ban" => user_repository.ban(user_id, payload.ban_reason.as_deref()).await?,
        "unban" => user_repository.unban(user_id).await?,
        _ => return Err(AppError::Validation("action must be 'ban' or 'unban'".into())),
    };

    Ok(Json(ModerationResponseDTO {
        id: user.id,
        email: user.email,
        banned: user.banned,
    }))
}
