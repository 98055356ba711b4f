use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::{EventId, UserId};
use kernel::model::user::{event::CreateUser, User};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, email, password_hash)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_id)
        .bind(&event.email)
        .bind(&event.password_hash)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e {
            // email の一意制約違反は重複登録として返す
            sqlx::Error::Database(e) if e.is_unique_violation() => {
                AppError::DuplicateUserError(event.email.clone())
            }
            e => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no user record has been created".into(),
            ));
        }

        Ok(User {
            id: user_id,
            email: event.email,
            created_events: Vec::new(),
        })
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, email, created_events
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, email, created_events
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn append_created_event(&self, user_id: UserId, event_id: EventId) -> AppResult<()> {
        // 単文の array_append で追記する。並行する追記が互いを失わないようにするため
        let res = sqlx::query(
            r#"
                UPDATE users
                SET created_events = array_append(created_events, $1)
                WHERE user_id = $2
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(format!(
                "no user record ({user_id}) to link event ({event_id})"
            )));
        }

        Ok(())
    }
}
