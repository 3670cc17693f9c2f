//! Contract models for country service
//!
//! These are the persisted entity shapes. They serialize with camelCase names
//! because the create route answers with the raw entity rather than a DTO.

use serde::Serialize;

/// Store-assigned row identifier
pub type Id = i32;

/// Country entity
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Store-assigned identifier, `0` until the row is inserted
    pub id: Id,
    /// Display name
    pub name: String,
    /// Short country code (e.g. "JM")
    pub short_name: String,
    /// Related hotels; `None` when the relation was not loaded
    pub hotels: Option<Vec<Hotel>>,
}

/// Hotel entity owned by a country
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: Id,
    pub name: String,
    pub address: String,
    pub rating: f64,
    /// Owning country
    pub country_id: Id,
}

/// Equality lookups supported by the country repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryFilter {
    Id(Id),
}

/// Relations that can be eagerly loaded with a country
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryInclude {
    Hotels,
}

/// Equality lookups supported by the hotel repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelFilter {
    Id(Id),
    CountryId(Id),
}
