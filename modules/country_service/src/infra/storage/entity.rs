//! SeaORM entities for database tables

/// Countries table entity
pub mod country {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "countries")]
    pub struct Model {
        /// Generated identifier (primary key)
        #[sea_orm(primary_key)]
        pub id: i32,

        pub name: String,

        pub short_name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with hotels
        #[sea_orm(has_many = "super::hotel::Entity")]
        Hotels,
    }

    impl Related<super::hotel::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Hotels.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Hotels table entity
pub mod hotel {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "hotels")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        pub name: String,

        pub address: String,

        pub rating: f64,

        /// Foreign key to countries, cascades on delete
        pub country_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::country::Entity",
            from = "Column::CountryId",
            to = "super::country::Column::Id",
            on_delete = "Cascade"
        )]
        Country,
    }

    impl Related<super::country::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Country.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
