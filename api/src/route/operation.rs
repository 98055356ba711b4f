use axum::routing::post;
use axum::Router;
use registry::AppRegistry;

use crate::handler::operation::execute_operation;

// 3 つの操作はすべて単一のエンドポイントで受け付ける
pub fn build_operation_routers() -> Router<AppRegistry> {
    Router::new().route("/query", post(execute_operation))
}
