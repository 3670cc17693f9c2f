//! HTTP request handlers - one unit of work per request
//!
//! Each handler begins a unit of work, delegates to its repositories, maps the
//! result and leaves failures to [`guarded`].

use super::{
    body::JsonBody,
    dto::*,
    error::{guarded, ApiError},
    path::IdParam,
    routes::get_country_location,
};
use crate::contract::{Country, CountryFilter, CountryInclude};
use crate::domain::UnitOfWorkFactory;
use axum::{
    http::{header, StatusCode},
    response::Response,
    Extension, Json,
};
use std::sync::Arc;

pub const GET_COUNTRIES: &str = "GetCountries";
pub const GET_COUNTRY: &str = "GetCountry";
pub const CREATE_COUNTRY: &str = "CreateCountry";
pub const UPDATE_COUNTRY: &str = "UpdateCountry";
pub const DELETE_COUNTRY: &str = "DeleteCountry";

type Factory = Extension<Arc<dyn UnitOfWorkFactory>>;

/// List all countries
#[utoipa::path(
    get,
    path = "/api/country",
    operation_id = "GetCountries",
    tag = "Country",
    responses(
        (status = 200, description = "All countries; hotels are not loaded and come back empty", body = [CountryDto]),
        (status = 500, description = "Unexpected failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn get_countries(Extension(factory): Factory) -> Response {
    guarded(GET_COUNTRIES, async move {
        let uow = factory.begin().await?;
        let countries = uow.countries().get_all().await?;

        let results: Vec<CountryDto> = countries.into_iter().map(CountryDto::from).collect();
        Ok::<_, ApiError>(Json(results))
    })
    .await
}

/// Get a country with its hotels.
///
/// An unknown id still answers `200`, with a `null` body.
#[utoipa::path(
    get,
    path = "/api/country/{id}",
    operation_id = "GetCountry",
    tag = "Country",
    params(("id" = i32, Path, description = "Country identifier")),
    responses(
        (status = 200, description = "The country and its hotels, or null", body = CountryDto),
        (status = 500, description = "Unexpected failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn get_country(Extension(factory): Factory, IdParam(id): IdParam) -> Response {
    guarded(GET_COUNTRY, async move {
        let uow = factory.begin().await?;
        let country = uow
            .countries()
            .get(CountryFilter::Id(id), &[CountryInclude::Hotels])
            .await?;

        let result: Option<CountryDto> = country.map(CountryDto::from);
        Ok::<_, ApiError>(Json(result))
    })
    .await
}

/// Create a country; the response body is the persisted entity
#[utoipa::path(
    post,
    path = "/api/country",
    operation_id = "CreateCountry",
    tag = "Country",
    request_body = CreateCountryDto,
    responses(
        (status = 201, description = "Persisted country; Location points at GetCountry"),
        (status = 400, description = "Body failed validation"),
        (status = 500, description = "Unexpected failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn create_country(
    Extension(factory): Factory,
    JsonBody(dto): JsonBody<CreateCountryDto>,
) -> Response {
    guarded(CREATE_COUNTRY, async move {
        dto.validate()?;
        let mut country = Country::from(dto);

        let uow = factory.begin().await?;
        uow.countries().insert(&mut country).await?;
        uow.save().await?;

        tracing::info!(country_id = country.id, "Created country");
        let location = get_country_location(country.id);
        Ok::<_, ApiError>((
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(country),
        ))
    })
    .await
}

/// Overwrite the name fields of a country
#[utoipa::path(
    put,
    path = "/api/country/{id}",
    operation_id = "UpdateCountry",
    tag = "Country",
    params(("id" = i32, Path, description = "Country identifier")),
    request_body = UpdateCountryDto,
    responses(
        (status = 204, description = "Country updated"),
        (status = 400, description = "Unknown id or invalid body", body = String, content_type = "text/plain"),
        (status = 500, description = "Unexpected failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn update_country(
    Extension(factory): Factory,
    IdParam(id): IdParam,
    JsonBody(dto): JsonBody<UpdateCountryDto>,
) -> Response {
    guarded(UPDATE_COUNTRY, async move {
        dto.validate()?;

        let uow = factory.begin().await?;
        let Some(mut country) = uow.countries().get(CountryFilter::Id(id), &[]).await? else {
            return Err(ApiError::InvalidAttempt { action: "UPDATE" });
        };

        dto.apply_to(&mut country);
        uow.countries().update(&country).await?;
        uow.save().await?;

        Ok::<_, ApiError>(StatusCode::NO_CONTENT)
    })
    .await
}

/// Permanently remove a country and its hotels
#[utoipa::path(
    delete,
    path = "/api/country/{id}",
    operation_id = "DeleteCountry",
    tag = "Country",
    params(("id" = i32, Path, description = "Country identifier")),
    responses(
        (status = 204, description = "Country deleted"),
        (status = 400, description = "Unknown id", body = String, content_type = "text/plain"),
        (status = 500, description = "Unexpected failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn delete_country(Extension(factory): Factory, IdParam(id): IdParam) -> Response {
    guarded(DELETE_COUNTRY, async move {
        let uow = factory.begin().await?;
        if uow.countries().get(CountryFilter::Id(id), &[]).await?.is_none() {
            return Err(ApiError::InvalidAttempt { action: "DELETE" });
        }

        uow.countries().delete(id).await?;
        uow.save().await?;

        tracing::info!(country_id = id, "Deleted country");
        Ok::<_, ApiError>(StatusCode::NO_CONTENT)
    })
    .await
}
