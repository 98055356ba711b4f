use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::{EventId, UserId};
use crate::model::user::{event::CreateUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    // ユーザーを登録する。email の一意性はストアの制約で担保する
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    // ユーザー ID からユーザーを取得する
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    // email からユーザーを取得する
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    // created_events にイベント ID を原子的に追加する
    async fn append_created_event(&self, user_id: UserId, event_id: EventId) -> AppResult<()>;
}
