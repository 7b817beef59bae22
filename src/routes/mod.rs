use axum::{middleware, routing::get, Router};

use crate::{middlewares::no_store::no_store_middleware, types::app_state::AppState};

mod get_bus_locations;
mod get_cities;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/api/bus-locations",
        get(get_bus_locations::get_bus_locations)
            .route_layer(middleware::from_fn(no_store_middleware)),
    )
    .route("/api/cities", get(get_cities::get_cities))
}
