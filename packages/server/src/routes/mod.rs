use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::health::*;
use crate::handlers::item::*;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_items, create_items))
        .routes(routes!(get_item, update_item, delete_item))
        .routes(routes!(health))
}
