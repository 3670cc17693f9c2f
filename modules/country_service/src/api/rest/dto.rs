//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Country DTOs =====

/// Country response DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    /// Server-assigned identifier
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Jamaica")]
    pub name: String,

    #[schema(example = "JM")]
    pub short_name: String,

    /// Related hotels; empty when the relation was not loaded
    pub hotels: Vec<HotelDto>,
}

/// Country creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCountryDto {
    /// At most 50 characters
    #[schema(example = "Jamaica")]
    pub name: String,

    /// At most 2 characters
    #[schema(example = "JM")]
    pub short_name: String,
}

/// Country update request, overlaid onto the stored country
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCountryDto {
    #[schema(example = "Jamaica")]
    pub name: String,

    #[schema(example = "JM")]
    pub short_name: String,
}

// ===== Hotel DTOs =====

/// Hotel response DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelDto {
    pub id: i32,

    #[schema(example = "Sandals Resort and Spa")]
    pub name: String,

    #[schema(example = "Negril")]
    pub address: String,

    #[schema(example = 4.5)]
    pub rating: f64,

    pub country_id: i32,
}

// Note: Conversion implementations live in mapper.rs
