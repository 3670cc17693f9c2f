//! SeaORM repository implementations
//!
//! Repositories run every statement on the transaction of the unit of work
//! that created them.

use crate::contract::{Country, CountryFilter, CountryInclude, Hotel, HotelFilter, Id};
use crate::domain::repository::Repository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter};
use std::convert::Infallible;
use std::sync::Arc;

use super::entity::{country, hotel};
use super::mapper;

// ===== Country Repository =====

pub struct SeaOrmCountryRepository {
    txn: Arc<DatabaseTransaction>,
}

impl SeaOrmCountryRepository {
    pub fn new(txn: Arc<DatabaseTransaction>) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl Repository<Country> for SeaOrmCountryRepository {
    type Filter = CountryFilter;
    type Include = CountryInclude;

    async fn get_all(&self) -> Result<Vec<Country>> {
        let results = country::Entity::find().all(self.txn.as_ref()).await?;

        Ok(results.into_iter().map(Country::from).collect())
    }

    async fn get(
        &self,
        filter: CountryFilter,
        include: &[CountryInclude],
    ) -> Result<Option<Country>> {
        let query = match filter {
            CountryFilter::Id(id) => country::Entity::find().filter(country::Column::Id.eq(id)),
        };

        if include.contains(&CountryInclude::Hotels) {
            let found = query
                .find_with_related(hotel::Entity)
                .all(self.txn.as_ref())
                .await?;

            return Ok(found
                .into_iter()
                .next()
                .map(|(country, hotels)| mapper::country_with_hotels(country, hotels)));
        }

        let result = query.one(self.txn.as_ref()).await?;

        Ok(result.map(Country::from))
    }

    async fn insert(&self, entity: &mut Country) -> Result<()> {
        let inserted = mapper::new_country(entity).insert(self.txn.as_ref()).await?;
        entity.id = inserted.id;

        Ok(())
    }

    async fn update(&self, entity: &Country) -> Result<()> {
        let active: country::ActiveModel = entity.into();
        active.update(self.txn.as_ref()).await?;

        Ok(())
    }

    async fn delete(&self, id: Id) -> Result<()> {
        country::Entity::delete_by_id(id)
            .exec(self.txn.as_ref())
            .await?;

        Ok(())
    }
}

// ===== Hotel Repository =====

pub struct SeaOrmHotelRepository {
    txn: Arc<DatabaseTransaction>,
}

impl SeaOrmHotelRepository {
    pub fn new(txn: Arc<DatabaseTransaction>) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl Repository<Hotel> for SeaOrmHotelRepository {
    type Filter = HotelFilter;
    type Include = Infallible;

    async fn get_all(&self) -> Result<Vec<Hotel>> {
        let results = hotel::Entity::find().all(self.txn.as_ref()).await?;

        Ok(results.into_iter().map(Hotel::from).collect())
    }

    async fn get(&self, filter: HotelFilter, _include: &[Infallible]) -> Result<Option<Hotel>> {
        let query = match filter {
            HotelFilter::Id(id) => hotel::Entity::find().filter(hotel::Column::Id.eq(id)),
            HotelFilter::CountryId(country_id) => {
                hotel::Entity::find().filter(hotel::Column::CountryId.eq(country_id))
            }
        };

        let result = query.one(self.txn.as_ref()).await?;

        Ok(result.map(Hotel::from))
    }

    async fn insert(&self, entity: &mut Hotel) -> Result<()> {
        let inserted = mapper::new_hotel(entity).insert(self.txn.as_ref()).await?;
        entity.id = inserted.id;

        Ok(())
    }

    async fn update(&self, entity: &Hotel) -> Result<()> {
        let active: hotel::ActiveModel = entity.into();
        active.update(self.txn.as_ref()).await?;

        Ok(())
    }

    async fn delete(&self, id: Id) -> Result<()> {
        hotel::Entity::delete_by_id(id)
            .exec(self.txn.as_ref())
            .await?;

        Ok(())
    }
}
