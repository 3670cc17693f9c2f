//! Contract layer - entity models shared by every other layer
//!
//! Storage and REST code both speak in these types; neither depends on the other.

pub mod model;

pub use model::{Country, CountryFilter, CountryInclude, Hotel, HotelFilter, Id};
