// API Integration Tests
//
// Drive the router in-process over a hand-built collection.
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use succulent_analytics::{
        create_router, AppState, DeriveOptions, PlantCollection, PlantEvent, PlantRecord,
    };
    use tower::ServiceExt; // for oneshot

    fn create_test_app() -> axum::Router {
        let plants = vec![
            PlantRecord::new(1, "Lola", "Echeveria", "elegans")
                .born("2020-01-01")
                .died("2021-07-01", "rot"),
            PlantRecord::new(2, "Lolita", "Echeveria", "agavoides").with_variety("Ebony"),
            PlantRecord::new(3, "Tom", "Haworthia", "attenuata"),
        ];
        let events = vec![
            PlantEvent::new(2, "watering", "2024-01-01"),
            PlantEvent::new(2, "watering", "2024-01-04"),
            PlantEvent::new(2, "watering", "2024-01-11"),
        ];

        let collection = PlantCollection::from_records(&plants, &events, &DeriveOptions::default());
        create_router(AppState::from_collection(collection))
    }

    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["plants"], 3);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_resolve_filters() {
        let request = post(
            "/api/filters/resolve",
            json!({
                "selection": {"name": ""},
                "triggers": [{"trigger": "genus_filter", "value": ["Echeveria"]}]
            }),
        );
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["reset"], false);
        assert_eq!(body["selection"]["genera"], json!(["Echeveria"]));
        assert_eq!(body["options"]["species"].as_array().unwrap().len(), 2);
        // no-variety placeholder first
        assert_eq!(body["options"]["variety"][0], json!({"label": "(none)", "value": ""}));
    }

    #[tokio::test]
    async fn test_resolve_reset() {
        let request = post(
            "/api/filters/resolve",
            json!({
                "selection": {"name": "lo", "genera": ["Echeveria"]},
                "triggers": [{"trigger": "reset"}]
            }),
        );
        let body = json_response(create_test_app().oneshot(request).await.unwrap()).await;

        assert_eq!(body["reset"], true);
        assert_eq!(body["selection"]["name"], "");
        assert_eq!(body["options"]["genus"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_dashboard() {
        let request = post("/api/dashboard", json!({"genera": ["Echeveria"]}));
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["plants"].as_array().unwrap().len(), 2);
        assert_eq!(body["summary"]["dead"], 1);
        assert_eq!(body["summary"]["avg_watering_text"], "5.0 days");
        assert_eq!(body["description"], "Genera: Echeveria");
        assert_eq!(body["charts"]["seasonality"]["counts"][6], 1);
    }

    #[tokio::test]
    async fn test_insight_insufficient_data() {
        let request = post("/api/insight", json!({"name": "nobody"}));
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert!(body["insight"].is_null());
        assert_eq!(body["reason"], "insufficient data");
    }

    #[tokio::test]
    async fn test_insight_with_selection() {
        let request = post("/api/insight", json!({"genera": ["Echeveria"]}));
        let body = json_response(create_test_app().oneshot(request).await.unwrap()).await;

        // every lens has data for Echeveria, and the comparison lens is excluded
        assert!(body["insight"]["text"].is_string());
        assert_ne!(body["insight"]["lens"], "survival_comparison");
    }
}
