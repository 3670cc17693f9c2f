//! OpenAPI document for the REST API

use super::{dto::*, handlers};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel Listing API", description = "Countries and their hotels"),
    paths(
        handlers::get_countries,
        handlers::get_country,
        handlers::create_country,
        handlers::update_country,
        handlers::delete_country,
    ),
    components(schemas(CountryDto, HotelDto, CreateCountryDto, UpdateCountryDto)),
    tags((name = "Country", description = "Country CRUD"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
