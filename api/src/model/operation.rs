use serde::{Deserialize, Serialize};

use crate::model::event::{CreateEventRequest, EventResponse};
use crate::model::user::{CreateUserRequest, UserResponse};

/// Envelope accepted by the single query endpoint. The operation name picks
/// the resolver; `arguments` carries that operation's input.
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", content = "arguments", rename_all = "camelCase")]
pub enum OperationRequest {
    Events,
    CreateEvent(CreateEventRequest),
    CreateUser(CreateUserRequest),
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OperationResponse {
    Events(Vec<EventResponse>),
    Event(EventResponse),
    User(UserResponse),
}
