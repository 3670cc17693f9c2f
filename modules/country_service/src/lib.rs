//! Country Service Module
//!
//! CRUD management of countries and their hotels for the hotel listing API.
//! Every request runs inside its own unit of work over the relational store.

// Public exports
pub mod contract;
pub use contract::{Country, CountryFilter, CountryInclude, Hotel, HotelFilter, Id};

pub mod module;
pub use module::CountryServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
