//! Request-scoped unit of work
//!
//! One unit of work is begun per request. Dropping it without calling
//! [`UnitOfWork::save`] discards everything it staged.

use super::repository::{CountryRepository, HotelRepository};
use anyhow::Result;
use async_trait::async_trait;

/// Aggregates one repository per entity type over a single transaction
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn countries(&self) -> &dyn CountryRepository;

    fn hotels(&self) -> &dyn HotelRepository;

    /// Commit all staged changes atomically.
    /// Consumes the unit of work so it cannot be saved twice.
    async fn save(self: Box<Self>) -> Result<()>;
}

/// Shared factory handing out request-scoped units of work
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>>;
}
