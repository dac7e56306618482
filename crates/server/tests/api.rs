use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use engine::{Engine, ProfitShares};
use http_body_util::BodyExt;
use migration::MigratorTrait;
use sea_orm::Database;
use serde_json::{Value, json};
use server::{ProductionDefaults, ServerState, router};
use tower::ServiceExt;

async fn app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db).build().await.unwrap();
    router(ServerState::new(
        engine,
        ProfitShares::default(),
        ProductionDefaults::default(),
    ))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn close(value: &Value, expected: f64) -> bool {
    (value.as_f64().unwrap() - expected).abs() < 1e-6
}

#[tokio::test]
async fn duplicate_equipment_code_is_a_conflict() {
    let app = app().await;
    let body = json!({"code": "D-1", "name": "Dumper one", "kind": "dumper"});

    let (status, created) = send(&app, "POST", "/equipment", Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].is_string());

    let (status, error) = send(&app, "POST", "/equipment", Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(error["error"].as_str().unwrap().contains("D-1"));

    let (status, dumpers) = send(&app, "GET", "/equipment/dumpers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dumpers.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn production_uses_the_configured_clay_dust_default() {
    let app = app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/production",
        Some(json!({"production_date": "2025-02-01", "gravel_cft": 1000.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, entries) = send(
        &app,
        "GET",
        "/production?start=2025-02-01&end=2025-02-28",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(close(&entries[0]["clay_dust_percent"], 33.33));
    assert!(close(&entries[0]["net_aggregate_cft"], 666.7));

    let (status, preview) = send(
        &app,
        "POST",
        "/production/reconcile",
        Some(json!({"gravel_cft": 500.0, "clay_dust_percent": 20.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(close(&preview["net_aggregate_cft"], 400.0));
}

#[tokio::test]
async fn invalid_input_is_unprocessable() {
    let app = app().await;

    let (status, error) = send(
        &app,
        "POST",
        "/production/reconcile",
        Some(json!({"gravel_cft": 0.0})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(error["error"].as_str().unwrap().contains("gravel_cft"));

    let (status, _) = send(&app, "GET", "/production/live/2025/13", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(
        &app,
        "GET",
        "/expenses?start=2025-03-01&end=2025-02-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn deleting_a_missing_record_is_not_found() {
    let app = app().await;
    let (status, _) = send(
        &app,
        "DELETE",
        "/blasting/00000000-0000-0000-0000-000000000001",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn month_flow_from_records_to_profit_sharing() {
    let app = app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/operations",
        Some(json!({"machine": "generator", "operation_date": "2025-02-03", "amount": 5000.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(
        &app,
        "POST",
        "/expenses",
        Some(json!({"ledger": "langar", "expense_date": "2025-02-04", "amount": 1000.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(
        &app,
        "POST",
        "/production",
        Some(json!({"production_date": "2025-02-05", "gravel_cft": 1000.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, "POST", "/profit-sharing/2025/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, report) = send(&app, "GET", "/summary/monthly?month=2&year=2025", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["months"][0]["key"], "Feb-25");
    assert!(close(&report["total"], 6000.0));

    let (status, summary) = send(
        &app,
        "PUT",
        "/monthly-summaries/2025/2",
        Some(json!({
            "sold_at_site_cft": 400.0,
            "sold_at_site_amount": 40000.0,
            "approx_per_cft_cost": 90.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(close(&summary["total_produced"], 667.0));
    assert!(close(&summary["total_revenue"], 64030.0));
    assert!(close(&summary["total_cost"], 6000.0));

    let (status, shared) = send(&app, "POST", "/profit-sharing/2025/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(close(&shared["net_profit"], 58030.0));
    assert!(close(&shared["partner_a_share"], 29015.0));
    assert!(close(&shared["partner_b_share"], 29015.0));

    let (status, stored) = send(&app, "GET", "/profit-sharing/2025/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["id"], shared["id"]);

    let (status, yearly) = send(&app, "GET", "/summary/yearly/2025", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(yearly["months"], 1);
    let (status, _) = send(&app, "GET", "/summary/yearly/2024", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
