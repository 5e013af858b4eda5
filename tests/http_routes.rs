mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use common::{RecordingService, curiosity, integrity, mentor, speaker, top_performer};
use portfolio_server::prelude::*;
use serde_json::Value;
use tower::ServiceExt;

fn router_over(service: RecordingService) -> Router {
    let container = ContainerBuilder::new()
        .provide::<dyn PortfolioService>(Arc::new(service))
        .build();
    build_router(container).unwrap()
}

async fn get(router: Router, uri: &str) -> Response {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_highlights_route_serves_json_with_marker_header() {
    let router = router_over(RecordingService::default().with_highlights(Ok(vec![top_performer()])));

    let response = get(router, "/portfolio/highlights").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["Highlights"], "value");
    let body = json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Top Performer");
    assert_eq!(body[0]["icon"], "trophy");
}

#[tokio::test]
async fn test_values_route_serves_json_with_marker_header() {
    let router = router_over(RecordingService::default().with_personal_values(Ok(vec![integrity()])));

    let response = get(router, "/portfolio/values").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["Values"], "value");
    let body = json_body(response).await;
    assert_eq!(body[0]["importance"], "High");
}

#[tokio::test]
async fn test_empty_result_is_serialized_as_empty_array() {
    let response = get(router_over(RecordingService::default()), "/portfolio/highlights").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_service_error_surfaces_as_server_error() {
    let router = router_over(
        RecordingService::default()
            .with_personal_values(Err(ServiceError::Database("Database error".to_string()))),
    );

    let response = get(router, "/portfolio/values").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get("Values").is_none());
    assert_eq!(json_body(response).await["message"], "Database error");
}

#[tokio::test]
async fn test_health_reports_ok_when_service_is_wired() {
    let response = get(router_over(RecordingService::default()), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn test_default_module_serves_empty_portfolio() {
    let router = build_router(Container::new()).unwrap();

    let response = get(router, "/portfolio/values").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = get(router_over(RecordingService::default()), "/portfolio/projects").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_routes_serialize_records_in_service_order() {
    let router = router_over(
        RecordingService::default()
            .with_highlights(Ok(vec![speaker(), mentor(), top_performer()]))
            .with_personal_values(Ok(vec![curiosity(), integrity()])),
    );

    let highlights = json_body(get(router.clone(), "/portfolio/highlights").await).await;
    let titles: Vec<_> = highlights
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Conference Speaker", "Mentor", "Top Performer"]);

    let values = json_body(get(router, "/portfolio/values").await).await;
    let ids: Vec<_> = values
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["2", "1"]);
}
