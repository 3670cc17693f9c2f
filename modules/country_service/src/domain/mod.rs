//! Domain layer - data access seams

pub mod repository;
pub mod unit_of_work;

pub use repository::{CountryRepository, HotelRepository, Repository};
pub use unit_of_work::{UnitOfWork, UnitOfWorkFactory};
