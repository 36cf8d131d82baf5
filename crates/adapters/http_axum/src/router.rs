//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use carwash_app::ports::CollectionStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the API routes at the root alongside a banner and a health check.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: CollectionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn banner() -> &'static str {
    "API del Carwash funcionando correctamente 🚗💦"
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use carwash_adapter_storage_json::InMemoryStore;
    use carwash_app::services::user_service::AdminSource;
    use carwash_app::store::Store;
    use carwash_domain::id::ServiceId;
    use carwash_domain::service::Service;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_state() -> (Arc<Store<InMemoryStore>>, AppState<InMemoryStore>) {
        let store = Arc::new(Store::new(InMemoryStore::new()));
        let state = AppState::new(Arc::clone(&store), AdminSource::Role);
        (store, state)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn register(app: &Router, name: &str, email: &str, role: &str) -> u64 {
        let (status, body) = send(
            app,
            Method::POST,
            "/register",
            Some(json!({"name": name, "email": email, "password": "secret", "role": role})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_u64().unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (_, state) = test_state();
        let app = build(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_banner_at_root() {
        let (_, state) = test_state();
        let app = build(state);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], "API del Carwash funcionando correctamente 🚗💦".as_bytes());
    }

    #[tokio::test]
    async fn should_register_without_exposing_password() {
        let (_, state) = test_state();
        let app = build(state);

        let (status, body) = send(
            &app,
            Method::POST,
            "/register",
            Some(json!({
                "name": "Ana",
                "email": "ana@x.com",
                "password": "p1",
                "role": "customer"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 1);
        assert_eq!(body["role"], "customer");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn should_reject_duplicate_email_with_bad_request() {
        let (_, state) = test_state();
        let app = build(state);
        register(&app, "Ana", "ana@x.com", "customer").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/register",
            Some(json!({
                "name": "Otra",
                "email": "ana@x.com",
                "password": "p",
                "role": "customer"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn should_login_and_reject_wrong_password() {
        let (_, state) = test_state();
        let app = build(state);
        register(&app, "Ana", "ana@x.com", "customer").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/login",
            Some(json!({"email": "ana@x.com", "password": "secret"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Login exitoso");
        assert_eq!(body["user"]["name"], "Ana");
        assert!(body["user"].get("password").is_none());

        let (status, body) = send(
            &app,
            Method::POST,
            "/login",
            Some(json!({"email": "ana@x.com", "password": "wrong"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Credenciales inválidas");
    }

    #[tokio::test]
    async fn should_return_not_found_when_no_admins() {
        let (_, state) = test_state();
        let app = build(state);
        register(&app, "Ana", "ana@x.com", "customer").await;

        let (status, _) = send(&app, Method::GET, "/admins", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        register(&app, "Luis", "luis@x.com", "admin").await;
        let (status, body) = send(&app, Method::GET, "/admins", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Luis");
    }

    #[tokio::test]
    async fn should_join_customers_with_users_and_count_them() {
        let (_, state) = test_state();
        let app = build(state);
        let ana = register(&app, "Ana", "ana@x.com", "customer").await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/customers",
            Some(json!({"userId": ana, "address": "Calle 1", "phone": "555"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        send(
            &app,
            Method::POST,
            "/customers",
            Some(json!({"userId": 99, "address": "Calle 2", "phone": "556"})),
        )
        .await;

        let (status, body) = send(&app, Method::GET, "/customers", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Ana");
        assert_eq!(body[0]["email"], "ana@x.com");
        assert_eq!(body[1]["name"], Value::Null);

        let (_, body) = send(&app, Method::GET, "/total/customers", None).await;
        assert_eq!(body, json!({"total_customers": 2}));
    }

    #[tokio::test]
    async fn should_book_update_and_show_events() {
        let (store, state) = test_state();
        store
            .backend()
            .save(&[Service {
                id: ServiceId::new(1),
                name: "Lavado completo".to_string(),
                extra: json!({"price": "20.000", "duration": "45 min"})
                    .as_object()
                    .cloned()
                    .unwrap(),
            }])
            .await
            .unwrap();
        let app = build(state);
        let ana = register(&app, "Ana", "ana@x.com", "customer").await;
        let luis = register(&app, "Luis", "luis@x.com", "admin").await;
        send(
            &app,
            Method::POST,
            "/customers",
            Some(json!({"userId": ana, "address": "Calle 1", "phone": "555"})),
        )
        .await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/events",
            Some(json!({
                "customerId": 1,
                "adminId": luis,
                "serviceId": 1,
                "vehicle": "Toyota",
                "date_time": "2024-05-01T10:00",
                "status": "pendiente"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 1}));

        let (status, body) = send(
            &app,
            Method::PUT,
            "/events/1/status",
            Some(json!({"status": "completado"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Estado actualizado");
        assert_eq!(body["event"]["status"], "completado");
        assert_eq!(body["event"]["vehicle"], "Toyota");

        let (_, body) = send(&app, Method::GET, "/customers/1/events", None).await;
        assert_eq!(body[0]["customer"], "Ana");
        assert_eq!(body[0]["admin"], "Luis");
        assert_eq!(body[0]["service"], "Lavado completo");

        let (status, body) = send(&app, Method::GET, "/admin/events/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["phone"], "555");
        assert_eq!(body["vehicle"], "Toyota");

        let (_, body) = send(&app, Method::GET, "/services", None).await;
        assert_eq!(
            body,
            json!([{"id": 1, "name": "Lavado completo", "price": "20.000", "duration": "45 min"}])
        );

        let (_, body) = send(&app, Method::GET, "/total/services", None).await;
        assert_eq!(body, json!({"total_services": 1}));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_event() {
        let (_, state) = test_state();
        let app = build(state);

        let (status, _) = send(
            &app,
            Method::PUT,
            "/events/7/status",
            Some(json!({"status": "completado"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::GET, "/admin/events/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_non_numeric_path_id() {
        let (_, state) = test_state();
        let app = build(state);

        let (status, body) = send(&app, Method::GET, "/products/abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("abc"));
    }

    #[tokio::test]
    async fn should_manage_products_lifecycle() {
        let (_, state) = test_state();
        let app = build(state);

        let (status, body) = send(
            &app,
            Method::POST,
            "/products",
            Some(json!({"name": "Cera", "price": 12.5})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 1);
        assert_eq!(body["stock"], 0);

        let (status, body) = send(
            &app,
            Method::PUT,
            "/products/1",
            Some(json!({"name": "Cera premium", "price": 15.0, "stock": 4})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Cera premium");
        assert_eq!(body["stock"], 4);

        let (status, body) = send(&app, Method::DELETE, "/products/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Producto eliminado");
        assert_eq!(body["product"]["id"], 1);

        let (status, _) = send(&app, Method::GET, "/products/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (_, body) = send(&app, Method::GET, "/products", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn should_reject_negative_product_price() {
        let (_, state) = test_state();
        let app = build(state);

        let (status, _) = send(
            &app,
            Method::POST,
            "/products",
            Some(json!({"name": "Cera", "price": -1.0})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
