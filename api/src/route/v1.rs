use axum::Router;
use registry::AppRegistry;

use super::health::build_health_check_routers;
use super::operation::build_operation_routers;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_operation_routers());
    Router::new().nest("/api/v1", router)
}
