//! HTTP API tests
//!
//! Drive the actix application in-process with `actix_web::test`.

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::common::fixtures::ItemRequestFactory;
    use actix_web::http::{StatusCode, header};
    use actix_web::{test, web};
    use item_service::config::Config;
    use item_service::server::{AppState, HttpServer};
    use item_service::storage::{ItemStore, MemoryItemStore};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.service.processing.simulated_latency_ms = 0;
        config.service.processing.workers = 4;
        config
    }

    fn memory_state() -> AppState {
        AppState::new(test_config(), Arc::new(MemoryItemStore::new()))
    }

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(HttpServer::create_app(web::Data::new($state))).await
        };
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = init_app!(memory_state());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["storage"]["backend"], "memory");
        assert_eq!(body["data"]["pool"]["capacity"], 4);
        assert_eq!(body["data"]["pool"]["name"], "ItemProcessor");
    }

    #[actix_web::test]
    async fn test_create_returns_created_with_location() {
        let app = init_app!(memory_state());

        let req = test::TestRequest::post()
            .uri("/api/v1/items")
            .set_json(ItemRequestFactory::named("Widget"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let location = resp
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body: Value = test::read_body_json(resp).await;
        let id = body["data"]["id"].as_i64().unwrap();
        assert_eq!(location, Some(format!("/api/v1/items/{}", id)));
        assert_eq!(body["data"]["name"], "Widget");
        assert_eq!(body["message"], "Item created");
    }

    #[actix_web::test]
    async fn test_create_duplicate_name_conflicts() {
        let app = init_app!(memory_state());

        for (name, expected) in [("Widget", StatusCode::CREATED), ("WIDGET", StatusCode::CONFLICT)] {
            let req = test::TestRequest::post()
                .uri("/api/v1/items")
                .set_json(ItemRequestFactory::named(name))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);

            if expected == StatusCode::CONFLICT {
                let body: Value = test::read_body_json(resp).await;
                assert_eq!(body["error"]["code"], "CONFLICT");
                assert_eq!(
                    body["error"]["message"],
                    "An item with this name (WIDGET) already exists"
                );
            }
        }
    }

    #[actix_web::test]
    async fn test_create_invalid_payload_lists_field_errors() {
        let app = init_app!(memory_state());

        let req = test::TestRequest::post()
            .uri("/api/v1/items")
            .set_json(ItemRequestFactory::invalid())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Validation failed");
        let fields = body["error"]["validation_errors"].as_object().unwrap();
        for field in ["name", "description", "status", "email"] {
            assert!(fields.contains_key(field), "missing error for {}", field);
        }
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = init_app!(memory_state());

        let req = test::TestRequest::post()
            .uri("/api/v1/items")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[actix_web::test]
    async fn test_get_missing_and_invalid_ids() {
        let app = init_app!(memory_state());

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/items/99").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"]["message"],
            "The item by the provided id (99) couldn't be found"
        );

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/items/abc").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_and_delete() {
        let store = Arc::new(MemoryItemStore::new());
        let created = store
            .create(ItemRequestFactory::named("Widget").into())
            .await
            .unwrap();
        let app = init_app!(AppState::new(test_config(), store.clone()));
        let uri = format!("/api/v1/items/{}", created.id);

        let mut change = ItemRequestFactory::named("Widget 2");
        change.status = "ACTIVE".to_string();
        let resp = test::call_service(
            &app,
            test::TestRequest::put().uri(&uri).set_json(&change).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Widget 2");
        assert_eq!(body["data"]["status"], "ACTIVE");

        let resp =
            test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(store.is_empty());

        let resp =
            test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_pages() {
        let db = TestDatabase::seeded(&["a", "b", "c"]).await;
        let app = init_app!(AppState::new(test_config(), db.store()));

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/items?page=0&size=2")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"]["total_items"], 3);
        assert_eq!(body["data"]["total_pages"], 2);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/items?page=7&size=2")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_process_empty_store_is_not_found() {
        let app = init_app!(memory_state());

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/items/process").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "No items could be found");
    }

    #[actix_web::test]
    async fn test_process_returns_accepted_with_ordered_items() {
        let db = TestDatabase::seeded(&["first", "second", "third"]).await;
        let app = init_app!(AppState::new(test_config(), db.store()));

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/items/process").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);

        let body: Value = test::read_body_json(resp).await;
        let items = body["data"].as_array().unwrap();
        let names: Vec<_> = items.iter().map(|item| item["name"].clone()).collect();
        assert_eq!(names, vec![json!("first"), json!("second"), json!("third")]);
        assert!(items.iter().all(|item| item["status"] == "PROCESSED"));
    }
}
