use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::AppError;
use crate::models::user::User;

pub const DEFAULT_BAN_REASON: &str = "Violation of the community rules";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Looks up a user by normalized email, creating the row on first sight.
    /// The upsert keeps racing first-logins from producing duplicate rows:
    /// the email uniqueness constraint decides, not a prior read.
    pub async fn resolve_or_create(&self, email: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, role, is_owner, banned, created_at)
             VALUES ($1, 'user', FALSE, FALSE, $2)
             ON CONFLICT (email) DO UPDATE SET email = excluded.email
             RETURNING id, email, role, is_owner, banned, ban_reason, created_at",
        )
        .bind(&email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Admin view, most recently created first.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, email, role, is_owner, banned, ban_reason, created_at
             FROM users
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn set_role(&self, user_id: i64, role: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET role = $2 WHERE id = $1
             RETURNING id, email, role, is_owner, banned, ban_reason, created_at",
        )
        .bind(user_id)
        .bind(role)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::UserNotFound)?;

        info!("Role of user {} changed to {}", user.id, user.role);
        Ok(user)
    }

    /// Bans a user. The is_owner guard lives in the same statement as the
    /// write, so an owner can never be banned even under concurrent calls;
    /// a protected target is indistinguishable from a missing one.
    pub async fn ban(&self, user_id: i64, reason: Option<&str>) -> Result<User, AppError> {
        let reason = reason.unwrap_or(DEFAULT_BAN_REASON);

        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET banned = TRUE, ban_reason = $2
             WHERE id = $1 AND is_owner = FALSE
             RETURNING id, email, role, is_owner, banned, ban_reason, created_at",
        )
        .bind(user_id)
        .bind(reason)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::UserNotFound)?;

        info!("User {} banned: {}", user.id, reason);
        Ok(user)
    }

    /// Lifts a ban and clears the stored reason. No ownership restriction.
    pub async fn unban(&self, user_id: i64) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET banned = FALSE, ban_reason = NULL
             WHERE id = $1
             RETURNING id, email, role, is_owner, banned, ban_reason, created_at",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::UserNotFound)?;

        info!("User {} unbanned", user.id);
        Ok(user)
    }
}
