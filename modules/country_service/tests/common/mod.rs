//! Common test utilities: in-memory store, request helpers, log capture

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use country_service::config::Config;
use country_service::contract::{Country, Hotel, Id};
use country_service::domain::UnitOfWorkFactory;
use country_service::CountryServiceModule;
use parking_lot::Mutex;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use tower::ServiceExt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

// ===== Store =====

/// Module over a migrated single-connection SQLite in-memory database.
/// One connection keeps every unit of work on the same in-memory schema.
pub async fn sqlite_module() -> CountryServiceModule {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    let module = CountryServiceModule::with_connection(Config::default(), db);
    module.migrate().await.unwrap();
    module
}

pub async fn seed_country(factory: &Arc<dyn UnitOfWorkFactory>, name: &str, short_name: &str) -> Id {
    let mut country = Country {
        name: name.to_string(),
        short_name: short_name.to_string(),
        ..Default::default()
    };

    let uow = factory.begin().await.unwrap();
    uow.countries().insert(&mut country).await.unwrap();
    uow.save().await.unwrap();
    country.id
}

pub async fn seed_hotel(factory: &Arc<dyn UnitOfWorkFactory>, country_id: Id, name: &str, rating: f64) -> Hotel {
    let mut hotel = Hotel {
        name: name.to_string(),
        address: format!("1 {name} Road"),
        rating,
        country_id,
        ..Default::default()
    };

    let uow = factory.begin().await.unwrap();
    uow.hotels().insert(&mut hotel).await.unwrap();
    uow.save().await.unwrap();
    hotel
}

// ===== HTTP =====

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

// ===== Log capture =====

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub operation: Option<String>,
    pub message: String,
}

/// Records every event emitted while its guard is alive on this thread
#[derive(Clone, Default)]
pub struct LogCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl LogCapture {
    /// Install as the thread-default subscriber until the guard drops
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let capture = Self::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn errors(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.level == Level::ERROR)
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct EventVisitor {
    operation: Option<String>,
    message: String,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "operation" => self.operation = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "operation" => self.operation = Some(format!("{value:?}")),
            "message" => self.message = format!("{value:?}"),
            _ => {}
        }
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        self.events.lock().push(CapturedEvent {
            level: *event.metadata().level(),
            operation: visitor.operation,
            message: visitor.message,
        });
    }
}
