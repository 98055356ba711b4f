use async_trait::async_trait;
use derive_new::new;
use kernel::model::event::{event::CreateEvent, Event};
use kernel::model::id::EventId;
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::event::EventRow, ConnectionPool};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent) -> AppResult<Event> {
        // created_at はストア側で確定させ、RETURNING で受け取る
        let event_id = EventId::new();
        let row: EventRow = sqlx::query_as(
            r#"
                INSERT INTO events (event_id, title, description, price, created_by)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING event_id, title, description, price, created_by, created_at
            "#,
        )
        .bind(event_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.price)
        .bind(event.created_by)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Event::from(row))
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
                SELECT
                    event_id,
                    title,
                    description,
                    price,
                    created_by,
                    created_at
                FROM events
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        let row: Option<EventRow> = sqlx::query_as(
            r#"
                SELECT
                    event_id,
                    title,
                    description,
                    price,
                    created_by,
                    created_at
                FROM events
                WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Event::from))
    }
}
