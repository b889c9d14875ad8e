//! HTTP-level integration tests for the JSON and CSV reports.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, body_text, create_id, get, post_json, site_body};
use serde_json::json;
use sqlx::SqlitePool;

/// Submit a log against `site_id` costing exactly `cost`.
async fn submit_log_costing(pool: &SqlitePool, site_id: &str, cost: f64) {
    let material = create_id(
        pool,
        "/api/materials",
        json!({"name": "Unit", "quantity": 100, "costPerUnit": cost}),
    )
    .await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/logs",
        json!({
            "siteId": site_id,
            "date": "2026-03-02",
            "materials": [{"materialId": material, "quantity": 1}],
            "labour": [],
            "notes": "",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_site_report_sums_logs(pool: SqlitePool) {
    let site_id = create_id(&pool, "/api/sites", site_body("Hall")).await;
    submit_log_costing(&pool, &site_id, 50.0).await;
    submit_log_costing(&pool, &site_id, 70.0).await;

    let response = get(common::build_test_app(pool), "/api/reports/sites").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let sites = json.as_array().unwrap();
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0]["_id"], site_id.as_str());
    assert_eq!(sites[0]["name"], "Hall");
    assert_eq!(sites[0]["client"]["name"], "Ann Client");
    assert_eq!(sites[0]["logs"].as_array().unwrap().len(), 2);
    assert_eq!(sites[0]["totalCost"], 120.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inventory_report(pool: SqlitePool) {
    create_id(
        &pool,
        "/api/materials",
        json!({"name": "Paint", "quantity": 10, "costPerUnit": 5.0}),
    )
    .await;

    let response = get(common::build_test_app(pool), "/api/reports/inventory").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Paint");
    assert_eq!(json[0]["quantity"], 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inventory_csv_download(pool: SqlitePool) {
    let id = create_id(
        &pool,
        "/api/materials",
        json!({"name": "Paint, white", "quantity": 10, "costPerUnit": 5.5}),
    )
    .await;

    let response = get(common::build_test_app(pool), "/api/reports/inventory/csv").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"inventory_report.csv\""
    );

    let csv = body_text(response).await;
    assert_eq!(
        csv,
        format!("_id,name,quantity,costPerUnit\n{id},\"Paint, white\",10,5.5\n")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_site_csv_download(pool: SqlitePool) {
    let site_id = create_id(&pool, "/api/sites", site_body("Hall")).await;
    submit_log_costing(&pool, &site_id, 50.0).await;

    let response = get(common::build_test_app(pool), "/api/reports/sites/csv").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"site_report.csv\""
    );

    let csv = body_text(response).await;
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "_id,name,client,address,startDate,status,logs,totalCost"
    );

    let row = lines.next().unwrap();
    assert!(row.starts_with(&format!("{site_id},Hall,")));
    // The address contains a comma and must be quoted.
    assert!(row.contains("\"12 Main St, Leeds\""));
    // Nested logs are embedded as JSON.
    assert!(row.contains("\"\"totalCost\"\":50.0"));
    assert!(row.ends_with(",50.0"));
    assert!(lines.next().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_reports(pool: SqlitePool) {
    let response = get(common::build_test_app(pool.clone()), "/api/reports/sites").await;
    assert_eq!(body_json(response).await, json!([]));

    let response = get(common::build_test_app(pool), "/api/reports/sites/csv").await;
    assert_eq!(
        body_text(response).await,
        "_id,name,client,address,startDate,status,logs,totalCost\n"
    );
}
