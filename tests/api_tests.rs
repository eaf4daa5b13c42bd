use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["service"], "transport-reservations");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_capacity_error_envelope_shape() {
    // El rechazo por capacidad debe llevar los tres números para que el
    // cliente pueda pintar "solo quedan N plazas"
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/full-route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "CAPACITY_EXCEEDED");
    assert_eq!(body["details"]["capacity"], 4);
    assert_eq!(body["details"]["occupied"], 3);
    assert_eq!(body["details"]["requested"], 2);
    assert_eq!(body["details"]["available"], 1);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// Función helper para crear la app de test
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({
                    "service": "transport-reservations",
                    "status": "healthy",
                }))
            }),
        )
        .route(
            "/full-route",
            get(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({
                        "error": "Capacity Exceeded",
                        "message": "Only 1 seat(s) left: 2 requested, 3 of 4 occupied",
                        "code": "CAPACITY_EXCEEDED",
                        "details": {
                            "capacity": 4,
                            "occupied": 3,
                            "requested": 2,
                            "available": 1,
                        },
                    })),
                )
            }),
        )
}
