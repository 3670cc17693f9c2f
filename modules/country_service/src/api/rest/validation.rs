//! Request body validation
//!
//! Rules checked before a handler touches the store.

use super::dto::{CreateCountryDto, UpdateCountryDto};
use super::error::ApiError;

pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_SHORT_NAME_LENGTH: usize = 2;

/// Validate a country name pair, collecting every violation
pub fn validate_country_fields(name: &str, short_name: &str) -> Result<(), ApiError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push("The Name field is required".to_string());
    } else if name.chars().count() > MAX_NAME_LENGTH {
        errors.push("Country Name Is Too Long".to_string());
    }

    if short_name.trim().is_empty() {
        errors.push("The ShortName field is required".to_string());
    } else if short_name.chars().count() > MAX_SHORT_NAME_LENGTH {
        errors.push("Short Country Name Is Too Long".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation { errors })
    }
}

impl CreateCountryDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_country_fields(&self.name, &self.short_name)
    }
}

impl UpdateCountryDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_country_fields(&self.name, &self.short_name)
    }
}
