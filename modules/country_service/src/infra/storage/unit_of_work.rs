//! SeaORM unit of work: one database transaction per request

use crate::domain::repository::{CountryRepository, HotelRepository};
use crate::domain::unit_of_work::{UnitOfWork, UnitOfWorkFactory};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::Arc;

use super::repositories::{SeaOrmCountryRepository, SeaOrmHotelRepository};

/// Unit of work over an open transaction.
///
/// SeaORM rolls the transaction back when it is dropped uncommitted.
pub struct SeaOrmUnitOfWork {
    txn: Arc<DatabaseTransaction>,
    countries: SeaOrmCountryRepository,
    hotels: SeaOrmHotelRepository,
}

impl SeaOrmUnitOfWork {
    pub fn new(txn: DatabaseTransaction) -> Self {
        let txn = Arc::new(txn);
        Self {
            countries: SeaOrmCountryRepository::new(txn.clone()),
            hotels: SeaOrmHotelRepository::new(txn.clone()),
            txn,
        }
    }
}

#[async_trait]
impl UnitOfWork for SeaOrmUnitOfWork {
    fn countries(&self) -> &dyn CountryRepository {
        &self.countries
    }

    fn hotels(&self) -> &dyn HotelRepository {
        &self.hotels
    }

    async fn save(self: Box<Self>) -> Result<()> {
        let Self {
            txn,
            countries,
            hotels,
        } = *self;
        drop(countries);
        drop(hotels);

        let txn = Arc::try_unwrap(txn)
            .map_err(|_| anyhow!("transaction is still referenced by a repository"))?;
        txn.commit().await?;

        Ok(())
    }
}

/// Begins a [`SeaOrmUnitOfWork`] on the shared connection pool
pub struct SeaOrmUnitOfWorkFactory {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUnitOfWorkFactory {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWorkFactory for SeaOrmUnitOfWorkFactory {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>> {
        let txn = self.db.begin().await?;

        Ok(Box::new(SeaOrmUnitOfWork::new(txn)))
    }
}
