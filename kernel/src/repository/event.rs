use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::event::{event::CreateEvent, Event};
use crate::model::id::EventId;

#[async_trait]
pub trait EventRepository: Send + Sync {
    // イベントを登録し、ストアが確定させたレコードを返す
    async fn create(&self, event: CreateEvent) -> AppResult<Event>;
    // すべてのイベントを新しい順に取得する
    async fn find_all(&self) -> AppResult<Vec<Event>>;
    // イベント ID からイベントを取得する
    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>>;
}
