pub mod event;

use crate::model::id::{EventId, UserId};

// 資格情報のハッシュはこの型には含めない。ストアの外に出さないため。
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub created_events: Vec<EventId>,
}
