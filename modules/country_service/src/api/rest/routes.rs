//! Route registration

use super::{handlers, openapi};
use crate::contract::Id;
use crate::domain::UnitOfWorkFactory;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;

/// Base path of the country controller
pub const COUNTRY_BASE_PATH: &str = "/api/country";

/// Path serving the OpenAPI document
pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";

/// Register all REST routes, sharing one unit-of-work factory
pub fn register_routes(router: Router, unit_of_work: Arc<dyn UnitOfWorkFactory>) -> Router {
    router
        .route(
            COUNTRY_BASE_PATH,
            get(handlers::get_countries).post(handlers::create_country),
        )
        .route(
            "/api/country/{id}",
            get(handlers::get_country)
                .put(handlers::update_country)
                .delete(handlers::delete_country),
        )
        .route(OPENAPI_PATH, get(openapi::openapi_json))
        // Add factory as extension for handlers
        .layer(Extension(unit_of_work))
}

/// Location of the `GetCountry` route for `id`
pub fn get_country_location(id: Id) -> String {
    format!("{COUNTRY_BASE_PATH}/{id}")
}
