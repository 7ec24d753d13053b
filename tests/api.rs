//! HTTP API 端到端测试
//!
//! 通过 tower::ServiceExt::oneshot 直接驱动 Router，数据库为内存 SQLite

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use contact_api::infrastructure::adapters::{Argon2Config, Argon2PasswordHasher};
use contact_api::infrastructure::http::{build_router, AppState};
use contact_api::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteAddressRepository,
    SqliteContactRepository, SqliteUserRepository,
};

struct TestApp {
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let hasher = Argon2PasswordHasher::with_config(Argon2Config {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap();

        let state = AppState::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteContactRepository::new(pool.clone())),
            Arc::new(SqliteAddressRepository::new(pool)),
            Arc::new(hasher),
        );

        Self {
            router: build_router(Arc::new(state)),
        }
    }

    async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Some(token), None).await
    }

    async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(token), Some(body)).await
    }

    async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, Some(token), None).await
    }

    async fn register(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.request(
            Method::POST,
            "/api/users",
            None,
            Some(json!({ "username": username, "password": password, "name": "test" })),
        )
        .await
    }

    async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.request(
            Method::POST,
            "/api/users/login",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await
    }

    /// 注册并登录，返回 token
    async fn user_token(&self, username: &str) -> String {
        let (status, _) = self.register(username, "rahasia").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = self.login(username, "rahasia").await;
        assert_eq!(status, StatusCode::OK);
        body["data"]["token"].as_str().unwrap().to_string()
    }

    async fn create_contact(&self, token: &str, body: Value) -> i64 {
        let (status, body) = self.post("/api/contacts", token, body).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["data"]["id"].as_i64().unwrap()
    }

    async fn create_address(&self, token: &str, contact_id: i64) -> i64 {
        let (status, body) = self
            .post(
                &format!("/api/contacts/{contact_id}/addresses"),
                token,
                json!({
                    "street": "Jalan Belum Ada",
                    "city": "Jakarta",
                    "province": "DKI Jakarta",
                    "country": "Indonesia",
                    "postal_code": "12345"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["data"]["id"].as_i64().unwrap()
    }
}

fn has_violation(body: &Value, field: &str) -> bool {
    body["errors"]
        .as_array()
        .map(|list| list.iter().any(|v| v["field"] == field))
        .unwrap_or(false)
}

// ============================================================================
// Ping
// ============================================================================

#[tokio::test]
async fn ping_requires_no_auth() {
    let app = TestApp::new().await;
    let (status, body) = app.request(Method::GET, "/api/ping", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn register_returns_user_without_password() {
    let app = TestApp::new().await;
    let (status, body) = app.register("test", "rahasia").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], "test");
    assert_eq!(body["data"]["name"], "test");
    assert!(body["data"].get("password").is_none());
}

#[tokio::test]
async fn register_rejects_invalid_payload() {
    let app = TestApp::new().await;
    let (status, body) = app
        .request(
            Method::POST,
            "/api/users",
            None,
            Some(json!({ "username": "", "password": "", "name": "" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let app = TestApp::new().await;
    app.register("test", "rahasia").await;

    let (status, body) = app.register("test", "rahasia").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], "Username already exists");
}

#[tokio::test]
async fn register_rejects_malformed_json() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["errors"].is_string());
}

#[tokio::test]
async fn login_returns_token() {
    let app = TestApp::new().await;
    app.register("test", "rahasia").await;

    let (status, body) = app.login("test", "rahasia").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn login_mismatch_is_unauthorized() {
    let app = TestApp::new().await;
    app.register("test", "rahasia").await;

    let (status, wrong_password) = app.login("test", "salah").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, unknown_user) = app.login("salah", "rahasia").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(wrong_password, unknown_user);
}

#[tokio::test]
async fn login_rejects_invalid_payload() {
    let app = TestApp::new().await;
    let (status, body) = app
        .request(Method::POST, "/api/users/login", None, Some(json!({})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(has_violation(&body, "username"));
    assert!(has_violation(&body, "password"));
}

#[tokio::test]
async fn current_user_requires_valid_token() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;

    let (status, body) = app.get("/api/users/current", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], "test");
    assert_eq!(body["data"]["name"], "test");

    let (status, body) = app.get("/api/users/current", "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"], "Unauthorized");

    let (status, _) = app
        .request(Method::GET, "/api/users/current", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bearer_prefix_is_accepted() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;

    let (status, _) = app
        .get("/api/users/current", &format!("Bearer {token}"))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_current_user_is_partial() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;

    let (status, body) = app
        .request(
            Method::PATCH,
            "/api/users/current",
            Some(&token),
            Some(json!({ "name": "Eko" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Eko");

    let (status, body) = app
        .request(
            Method::PATCH,
            "/api/users/current",
            Some(&token),
            Some(json!({ "password": "baru" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Eko");

    let (status, _) = app.login("test", "rahasia").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app.login("test", "baru").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_current_user_rejects_empty_and_long_values() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;

    let (status, body) = app
        .request(
            Method::PATCH,
            "/api/users/current",
            Some(&token),
            Some(json!({ "name": "", "password": "x".repeat(101) })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(has_violation(&body, "name"));
    assert!(has_violation(&body, "password"));
}

#[tokio::test]
async fn logout_invalidates_token() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;

    let (status, body) = app.delete("/api/users/logout", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "OK");

    let (status, _) = app.get("/api/users/current", &token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.delete("/api/users/logout", &token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Contacts
// ============================================================================

#[tokio::test]
async fn create_contact_returns_record_with_id() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;

    let (status, body) = app
        .post(
            "/api/contacts",
            &token,
            json!({
                "first_name": "test",
                "last_name": "test",
                "email": "test@pzn.com",
                "phone": "081283331221"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["id"].as_i64().unwrap() > 0);
    assert_eq!(body["data"]["first_name"], "test");
    assert_eq!(body["data"]["last_name"], "test");
    assert_eq!(body["data"]["email"], "test@pzn.com");
    assert_eq!(body["data"]["phone"], "081283331221");
}

#[tokio::test]
async fn create_contact_reports_every_violation() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;

    let (status, body) = app
        .post(
            "/api/contacts",
            &token,
            json!({
                "first_name": "",
                "email": "salah",
                "phone": "0".repeat(21)
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(has_violation(&body, "first_name"));
    assert!(has_violation(&body, "email"));
    assert!(has_violation(&body, "phone"));
}

#[tokio::test]
async fn authentication_runs_before_validation() {
    let app = TestApp::new().await;

    let (status, _) = app
        .request(Method::POST, "/api/contacts", None, Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_contact_scoped_to_owner() {
    let app = TestApp::new().await;
    let alice = app.user_token("alice").await;
    let bob = app.user_token("bob").await;
    let id = app
        .create_contact(&alice, json!({ "first_name": "Eko", "phone": "0899" }))
        .await;

    let (status, body) = app.get(&format!("/api/contacts/{id}"), &alice).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["first_name"], "Eko");
    assert!(body["data"]["last_name"].is_null());

    let (status, body) = app.get(&format!("/api/contacts/{id}"), &bob).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], "contact is not found");

    let (status, _) = app.get(&format!("/api/contacts/{}", id + 1), &alice).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_contact_id_is_validation_error() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;

    let (status, body) = app.get("/api/contacts/abc", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(has_violation(&body, "contact_id"));

    let (status, body) = app.get("/api/contacts/0", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(has_violation(&body, "contact_id"));
}

#[tokio::test]
async fn update_contact_replaces_fields() {
    let app = TestApp::new().await;
    let alice = app.user_token("alice").await;
    let bob = app.user_token("bob").await;
    let id = app
        .create_contact(
            &alice,
            json!({ "first_name": "Eko", "last_name": "Khannedy", "email": "eko@pzn.com" }),
        )
        .await;

    let (status, body) = app
        .put(
            &format!("/api/contacts/{id}"),
            &alice,
            json!({ "first_name": "Budi", "phone": "0811" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["first_name"], "Budi");
    assert!(body["data"]["last_name"].is_null());
    assert!(body["data"]["email"].is_null());
    assert_eq!(body["data"]["phone"], "0811");

    let (status, _) = app
        .put(&format!("/api/contacts/{id}"), &alice, json!({ "last_name": "x" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .put(&format!("/api/contacts/{id}"), &bob, json!({ "first_name": "x" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn remove_contact() {
    let app = TestApp::new().await;
    let alice = app.user_token("alice").await;
    let bob = app.user_token("bob").await;
    let id = app.create_contact(&alice, json!({ "first_name": "Eko" })).await;

    let (status, _) = app.delete(&format!("/api/contacts/{id}"), &bob).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.delete(&format!("/api/contacts/{id}"), &alice).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "OK");

    let (status, _) = app.get(&format!("/api/contacts/{id}"), &alice).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/api/contacts/{id}"), &alice).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_contacts_pages_and_filters() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;
    let other = app.user_token("other").await;

    for i in 0..15 {
        app.create_contact(
            &token,
            json!({
                "first_name": format!("test {i}"),
                "last_name": "Khannedy",
                "email": format!("test{i}@pzn.com"),
                "phone": format!("0899{i}")
            }),
        )
        .await;
    }
    app.create_contact(&other, json!({ "first_name": "test other" }))
        .await;

    let (status, body) = app.get("/api/contacts", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["paging"]["page"], 1);
    assert_eq!(body["paging"]["total_page"], 2);
    assert_eq!(body["paging"]["total_item"], 15);

    let (_, body) = app.get("/api/contacts?page=2", &token).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["paging"]["page"], 2);

    let (_, body) = app.get("/api/contacts?page=3", &token).await;
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["paging"]["total_item"], 15);
    assert_eq!(body["paging"]["total_page"], 2);

    let (_, body) = app.get("/api/contacts?name=test%201", &token).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
    assert_eq!(body["paging"]["total_item"], 6);
    assert_eq!(body["paging"]["total_page"], 1);

    let (_, body) = app.get("/api/contacts?name=KHANNEDY&size=4", &token).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
    assert_eq!(body["paging"]["total_page"], 4);

    let (_, body) = app.get("/api/contacts?email=test3%40", &token).await;
    assert_eq!(body["paging"]["total_item"], 1);

    let (_, body) = app.get("/api/contacts?phone=08991", &token).await;
    assert_eq!(body["paging"]["total_item"], 6);

    let (_, body) = app.get("/api/contacts?name=nobody", &token).await;
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["paging"]["total_page"], 0);
}

#[tokio::test]
async fn search_contacts_rejects_bad_paging() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;

    let (status, body) = app.get("/api/contacts?size=101", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(has_violation(&body, "size"));

    let (status, body) = app.get("/api/contacts?page=0", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(has_violation(&body, "page"));

    let (status, body) = app.get("/api/contacts?page=abc&size=xyz", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(has_violation(&body, "page"));
    assert!(has_violation(&body, "size"));
}

// ============================================================================
// Addresses
// ============================================================================

#[tokio::test]
async fn address_crud() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;
    let contact_id = app.create_contact(&token, json!({ "first_name": "Eko" })).await;
    let address_id = app.create_address(&token, contact_id).await;
    let uri = format!("/api/contacts/{contact_id}/addresses/{address_id}");

    let (status, body) = app.get(&uri, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], address_id);
    assert_eq!(body["data"]["country"], "Indonesia");
    assert_eq!(body["data"]["postal_code"], "12345");

    let (status, body) = app
        .put(
            &uri,
            &token,
            json!({ "city": "Bandung", "country": "Indonesia", "postal_code": "40111" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["city"], "Bandung");
    assert!(body["data"]["street"].is_null());
    assert_eq!(body["data"]["postal_code"], "40111");

    let (status, body) = app
        .get(&format!("/api/contacts/{contact_id}/addresses"), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = app.delete(&uri, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "OK");

    let (status, body) = app.get(&uri, &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], "address is not found");
}

#[tokio::test]
async fn create_address_validates_required_fields() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;
    let contact_id = app.create_contact(&token, json!({ "first_name": "Eko" })).await;

    let (status, body) = app
        .post(
            &format!("/api/contacts/{contact_id}/addresses"),
            &token,
            json!({ "street": "Jalan", "postal_code": "12345678901" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(has_violation(&body, "country"));
    assert!(has_violation(&body, "postal_code"));
}

#[tokio::test]
async fn address_requires_owned_contact() {
    let app = TestApp::new().await;
    let alice = app.user_token("alice").await;
    let bob = app.user_token("bob").await;
    let contact_id = app.create_contact(&alice, json!({ "first_name": "Eko" })).await;
    let address_id = app.create_address(&alice, contact_id).await;
    let uri = format!("/api/contacts/{contact_id}/addresses/{address_id}");

    let (status, body) = app.get(&uri, &bob).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], "contact is not found");

    let (status, _) = app
        .put(&uri, &bob, json!({ "country": "Malaysia", "postal_code": "1" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&uri, &bob).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .get(&format!("/api/contacts/{contact_id}/addresses"), &bob)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post(
            &format!("/api/contacts/{contact_id}/addresses"),
            &bob,
            json!({ "country": "Malaysia", "postal_code": "1" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 未被修改
    let (status, body) = app.get(&uri, &alice).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["country"], "Indonesia");
}

#[tokio::test]
async fn address_under_wrong_contact_is_not_found() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;
    let first = app.create_contact(&token, json!({ "first_name": "Eko" })).await;
    let second = app.create_contact(&token, json!({ "first_name": "Budi" })).await;
    let address_id = app.create_address(&token, first).await;

    let (status, body) = app
        .get(&format!("/api/contacts/{second}/addresses/{address_id}"), &token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], "address is not found");
}

#[tokio::test]
async fn removing_contact_removes_its_addresses() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;
    let contact_id = app.create_contact(&token, json!({ "first_name": "Eko" })).await;
    let address_id = app.create_address(&token, contact_id).await;

    let (status, _) = app
        .delete(&format!("/api/contacts/{contact_id}"), &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .get(
            &format!("/api/contacts/{contact_id}/addresses/{address_id}"),
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_address_ids_are_validation_errors() {
    let app = TestApp::new().await;
    let token = app.user_token("test").await;

    let (status, body) = app.get("/api/contacts/abc/addresses/xyz", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(has_violation(&body, "contact_id"));
    assert!(has_violation(&body, "address_id"));
}
