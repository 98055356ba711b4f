use chrono::{DateTime, Utc};
use kernel::model::event::Event;
use kernel::model::id::{EventId, UserId};

#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub event_id: EventId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            event_id,
            title,
            description,
            price,
            created_by,
            created_at,
        } = value;
        Event {
            id: event_id,
            title,
            description,
            price,
            created_by,
            created_at,
        }
    }
}
