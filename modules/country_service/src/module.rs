//! Module declaration and lifecycle implementation

use crate::api::rest::routes::register_routes;
use crate::config::Config;
use crate::domain::UnitOfWorkFactory;
use crate::infra::storage::{migrations::Migrator, SeaOrmUnitOfWorkFactory};
use anyhow::Result;
use axum::Router;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Country service module
pub struct CountryServiceModule {
    config: Config,
    db: Arc<DatabaseConnection>,
    unit_of_work: Arc<dyn UnitOfWorkFactory>,
}

impl CountryServiceModule {
    /// Connect to the configured store and apply migrations if enabled
    pub async fn init(config: Config) -> Result<Self> {
        let mut options = ConnectOptions::new(config.database.url.clone());
        options
            .max_connections(config.database.max_connections)
            .min_connections(config.database.min_connections)
            .sqlx_logging(config.database.sqlx_logging);

        let db = Database::connect(options).await?;
        let module = Self::with_connection(config, db);

        if module.config.database.run_migrations {
            module.migrate().await?;
        }

        tracing::info!("Country service initialized");
        Ok(module)
    }

    /// Build the module around an already open connection
    pub fn with_connection(config: Config, db: DatabaseConnection) -> Self {
        let db = Arc::new(db);
        let unit_of_work = Arc::new(SeaOrmUnitOfWorkFactory::new(db.clone()));

        Self {
            config,
            db,
            unit_of_work,
        }
    }

    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(self.db.as_ref(), None).await?;
        tracing::info!("Country service migrations completed");
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn unit_of_work(&self) -> Arc<dyn UnitOfWorkFactory> {
        self.unit_of_work.clone()
    }

    /// REST routes of this module
    pub fn router(&self) -> Router {
        tracing::info!("Registering country service REST routes");
        register_routes(Router::new(), self.unit_of_work())
    }

    /// Serve the REST routes on `listener` until `cancel` fires
    pub async fn serve(self: Arc<Self>, listener: TcpListener, cancel: CancellationToken) -> Result<()> {
        let router = self.router();
        tracing::info!(addr = %listener.local_addr()?, "Country service listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(async move { cancel.cancelled().await })
            .await?;

        tracing::info!("Country service stopped");
        Ok(())
    }
}
