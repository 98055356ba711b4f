use kernel::model::id::{EventId, UserId};
use kernel::model::user::User;

// password_hash は読み出しの対象外。SELECT 句に含めないこと。
#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub email: String,
    pub created_events: Vec<EventId>,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            email,
            created_events,
        } = value;
        User {
            id: user_id,
            email,
            created_events,
        }
    }
}
