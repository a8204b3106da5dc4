#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::util::ServiceExt;

use kaarigar_backend::services::workers::RegisterWorkerRequest;
use kaarigar_backend::{routes, AppState, Config, Store, StoreOptions};

/// Fresh in-memory database with migrations applied and cheap password hashing.
pub async fn test_state() -> AppState {
    let config = Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        "PASSWORD_HASH_MEMORY_KIB" => Some("1024".to_string()),
        "PASSWORD_HASH_ITERATIONS" => Some("1".to_string()),
        _ => None,
    })
    .expect("config");

    let store = Store::new(StoreOptions::from_config(&config));
    let db = store.acquire().await.expect("connect");
    Migrator::up(&db, None).await.expect("migrate");

    AppState { store, config }
}

pub async fn test_db(state: &AppState) -> DatabaseConnection {
    state.store.acquire().await.expect("acquire")
}

pub fn test_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}

pub fn worker_request(name: &str, service: &str, pincode: &str, charges: f64) -> RegisterWorkerRequest {
    RegisterWorkerRequest {
        name: name.to_string(),
        phone: "9999999999".to_string(),
        email: format!("{}@x.com", name.to_lowercase()),
        service: service.to_string(),
        location: "Pune".to_string(),
        full_address: "12 MG Road, Pune".to_string(),
        pincode: pincode.to_string(),
        experience: Some("5".to_string()),
        per_day_charges: Some(charges),
        description: None,
    }
}

pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
