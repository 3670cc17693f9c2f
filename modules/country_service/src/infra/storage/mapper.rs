//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{country, hotel};
use crate::contract::{Country, Hotel};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

// ===== Country Conversions =====

/// Country without its hotels loaded
impl From<country::Model> for Country {
    fn from(entity: country::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            short_name: entity.short_name,
            hotels: None,
        }
    }
}

/// Country with its eagerly loaded hotels
pub fn country_with_hotels(entity: country::Model, hotels: Vec<hotel::Model>) -> Country {
    Country {
        hotels: Some(hotels.into_iter().map(Hotel::from).collect()),
        ..entity.into()
    }
}

/// Active model for inserting a new row; the id is left to the store
pub fn new_country(model: &Country) -> country::ActiveModel {
    country::ActiveModel {
        id: NotSet,
        name: Set(model.name.clone()),
        short_name: Set(model.short_name.clone()),
    }
}

/// Active model overwriting the scalar columns of an existing row
impl From<&Country> for country::ActiveModel {
    fn from(model: &Country) -> Self {
        Self {
            id: Unchanged(model.id),
            name: Set(model.name.clone()),
            short_name: Set(model.short_name.clone()),
        }
    }
}

// ===== Hotel Conversions =====

impl From<hotel::Model> for Hotel {
    fn from(entity: hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            rating: entity.rating,
            country_id: entity.country_id,
        }
    }
}

pub fn new_hotel(model: &Hotel) -> hotel::ActiveModel {
    hotel::ActiveModel {
        id: NotSet,
        name: Set(model.name.clone()),
        address: Set(model.address.clone()),
        rating: Set(model.rating),
        country_id: Set(model.country_id),
    }
}

impl From<&Hotel> for hotel::ActiveModel {
    fn from(model: &Hotel) -> Self {
        Self {
            id: Unchanged(model.id),
            name: Set(model.name.clone()),
            address: Set(model.address.clone()),
            rating: Set(model.rating),
            country_id: Set(model.country_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jamaica() -> country::Model {
        country::Model {
            id: 1,
            name: "Jamaica".to_string(),
            short_name: "JM".to_string(),
        }
    }

    #[test]
    fn plain_model_leaves_hotels_unloaded() {
        let country: Country = jamaica().into();
        assert_eq!(country.id, 1);
        assert_eq!(country.short_name, "JM");
        assert!(country.hotels.is_none());
    }

    #[test]
    fn eager_loaded_hotels_keep_store_order() {
        let hotels = vec![
            hotel::Model {
                id: 7,
                name: "Sandals Resort and Spa".to_string(),
                address: "Negril".to_string(),
                rating: 4.5,
                country_id: 1,
            },
            hotel::Model {
                id: 9,
                name: "Comfort Suites".to_string(),
                address: "George Town".to_string(),
                rating: 4.3,
                country_id: 1,
            },
        ];

        let country = country_with_hotels(jamaica(), hotels);
        let ids: Vec<_> = country
            .hotels
            .unwrap_or_default()
            .iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, vec![7, 9]);
    }

    #[test]
    fn insert_model_never_carries_an_id() {
        let country = Country {
            id: 42,
            name: "Bahamas".to_string(),
            short_name: "BS".to_string(),
            hotels: None,
        };

        let active = new_country(&country);
        assert_eq!(active.id, NotSet);
        assert_eq!(active.name, Set("Bahamas".to_string()));
    }

    #[test]
    fn update_model_keeps_id_unchanged() {
        let country = Country {
            id: 3,
            name: "Cayman Islands".to_string(),
            short_name: "CI".to_string(),
            hotels: Some(vec![]),
        };

        let active: country::ActiveModel = (&country).into();
        assert_eq!(active.id, Unchanged(3));
        assert_eq!(active.short_name, Set("CI".to_string()));
    }
}
