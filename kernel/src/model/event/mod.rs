pub mod event;

use chrono::{DateTime, Utc};

use crate::model::id::{EventId, UserId};

#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}
