//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Country, CountryFilter, CountryInclude, Hotel, HotelFilter, Id};
use anyhow::Result;
use async_trait::async_trait;
use std::convert::Infallible;

/// Generic data access over one entity type.
///
/// Each entity names its own predicate (`Filter`) and eager-loadable
/// relations (`Include`), so queries are built explicitly per entity.
/// Writes are staged on the owning unit of work and become durable when it
/// is saved.
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Equality predicate accepted by [`Repository::get`]
    type Filter: Send + Sync;

    /// Relation names accepted by [`Repository::get`]
    type Include: Send + Sync;

    /// All rows, store order
    async fn get_all(&self) -> Result<Vec<T>>;

    /// First row matching `filter`, with each relation in `include` loaded.
    /// Returns `None` if nothing matches.
    async fn get(&self, filter: Self::Filter, include: &[Self::Include]) -> Result<Option<T>>;

    /// Stage a new row. The store-assigned id is written back into `entity`.
    async fn insert(&self, entity: &mut T) -> Result<()>;

    /// Stage a field update of an existing row
    async fn update(&self, entity: &T) -> Result<()>;

    /// Stage removal of the row with `id`. Callers check existence first.
    async fn delete(&self, id: Id) -> Result<()>;
}

/// Repository for countries
pub trait CountryRepository:
    Repository<Country, Filter = CountryFilter, Include = CountryInclude>
{
}

impl<R> CountryRepository for R where
    R: Repository<Country, Filter = CountryFilter, Include = CountryInclude>
{
}

/// Repository for hotels
pub trait HotelRepository: Repository<Hotel, Filter = HotelFilter, Include = Infallible> {}

impl<R> HotelRepository for R where R: Repository<Hotel, Filter = HotelFilter, Include = Infallible> {}
