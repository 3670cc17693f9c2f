//! Mapper implementations for converting between DTOs and contract models
//!
//! Each DTO pair has one explicit conversion. Update DTOs are overlaid onto an
//! existing entity instead of building a new one.

use super::dto::*;
use crate::contract::{Country, Hotel};

// ===== Country conversions =====

impl From<Country> for CountryDto {
    fn from(country: Country) -> Self {
        Self {
            id: country.id,
            name: country.name,
            short_name: country.short_name,
            hotels: country
                .hotels
                .unwrap_or_default()
                .into_iter()
                .map(HotelDto::from)
                .collect(),
        }
    }
}

impl From<CreateCountryDto> for Country {
    fn from(dto: CreateCountryDto) -> Self {
        Self {
            id: 0,
            name: dto.name,
            short_name: dto.short_name,
            hotels: None,
        }
    }
}

impl UpdateCountryDto {
    /// Overwrite the mapped fields of `country`; `id` and `hotels` are left alone
    pub fn apply_to(self, country: &mut Country) {
        country.name = self.name;
        country.short_name = self.short_name;
    }
}

// ===== Hotel conversions =====

impl From<Hotel> for HotelDto {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            address: hotel.address,
            rating: hotel.rating,
            country_id: hotel.country_id,
        }
    }
}
