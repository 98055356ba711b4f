use axum::extract::State;
use axum::Json;
use garde::Validate;
use kernel::model::user::event::CreateUser;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::event::{CreateEventRequest, EventResponse};
use crate::model::operation::{OperationRequest, OperationResponse};
use crate::model::user::{CreateUserRequest, UserResponse};

pub async fn execute_operation(
    State(registry): State<AppRegistry>,
    Json(req): Json<OperationRequest>,
) -> AppResult<Json<OperationResponse>> {
    match req {
        OperationRequest::Events => events(registry).await,
        OperationRequest::CreateEvent(req) => create_event(registry, req).await,
        OperationRequest::CreateUser(req) => create_user(registry, req).await,
    }
    .map(Json)
}

async fn events(registry: AppRegistry) -> AppResult<OperationResponse> {
    registry
        .event_repository()
        .find_all()
        .await
        .map(|events| events.into_iter().map(EventResponse::from).collect())
        .map(OperationResponse::Events)
}

async fn create_event(
    registry: AppRegistry,
    req: CreateEventRequest,
) -> AppResult<OperationResponse> {
    req.validate(&())?;

    // ① 作成者が登録済みであることを先に確認する
    let creator = req.creator;
    registry
        .user_repository()
        .find_by_id(creator)
        .await?
        .ok_or_else(|| {
            AppError::ReferentialIntegrityError(format!(
                "creator ({creator}) is not a registered user"
            ))
        })?;

    // ② イベントを登録する
    let event = registry.event_repository().create(req.into()).await?;

    // ③ 作成者の created_events にイベント ID を追記する。
    // ② と ③ は独立した 2 つの書き込みで、③ が失敗しても ② は取り消さない。
    // その場合イベントは残ったまま、呼び出し元には失敗が返る。
    registry
        .user_repository()
        .append_created_event(creator, event.id)
        .await?;

    Ok(OperationResponse::Event(event.into()))
}

async fn create_user(
    registry: AppRegistry,
    req: CreateUserRequest,
) -> AppResult<OperationResponse> {
    req.validate(&())?;

    let CreateUserRequest { email, password } = req;
    let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;

    registry
        .user_repository()
        .create(CreateUser::new(email, password_hash))
        .await
        .map(UserResponse::from)
        .map(OperationResponse::User)
}
