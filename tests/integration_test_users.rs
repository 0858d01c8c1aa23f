mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        panic!("Response body is empty. Status: {}", status);
    }
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "Failed to parse JSON: {:?}. Status: {}. Body: {:?}",
            e,
            status,
            String::from_utf8_lossy(&bytes)
        )
    })
}

async fn create_user_type(app: &TestApp, name: &str) -> i64 {
    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/user_types")
                .header("Content-Type", "application/json")
                .body(Body::from(json!({ "name": name }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    parse_body(res).await["user_type_id"].as_i64().unwrap()
}

fn user_payload(username: &str, email: &str, user_type_id: i64) -> Value {
    json!({
        "first_name": "Test",
        "last_name": "User",
        "username": username,
        "email": email,
        "age": 25,
        "user_type_id": user_type_id,
        "password": "securepassword"
    })
}

async fn post_user(app: &TestApp, payload: &Value) -> axum::response::Response {
    app.router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/users")
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_and_fetch_user() {
    let app = TestApp::new().await;
    let type_id = create_user_type(&app, "Student").await;

    let res = post_user(&app, &user_payload("testuser", "testuser@example.com", type_id)).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let user = parse_body(res).await;
    let user_id = user["user_id"].as_i64().unwrap();
    assert_eq!(user["email"], "testuser@example.com");
    assert_eq!(user["is_active"], true);
    assert_eq!(user["user_type_id"].as_i64().unwrap(), type_id);
    assert!(
        user.get("password_hash").is_none(),
        "password hash must never be serialized: {}",
        user
    );

    let by_id = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/v1/users/{}", user_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(by_id.status(), StatusCode::OK);
    assert_eq!(parse_body(by_id).await["username"], "testuser");

    let by_email = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/users/email/testuser@example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(by_email.status(), StatusCode::OK);
    assert_eq!(parse_body(by_email).await["user_id"].as_i64().unwrap(), user_id);
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = TestApp::new().await;
    let type_id = create_user_type(&app, "Student").await;

    let res = post_user(&app, &user_payload("first", "taken@example.com", type_id)).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = post_user(&app, &user_payload("second", "taken@example.com", type_id)).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let body = parse_body(res).await;
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 1);
    assert_eq!(detail[0]["loc"], json!(["body", "email"]));
    assert_eq!(detail[0]["msg"], "Email already registered");

    let count = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/users/count")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(parse_body(count).await.as_i64().unwrap(), 1);
}

#[tokio::test]
async fn test_create_user_unknown_user_type() {
    let app = TestApp::new().await;

    let res = post_user(&app, &user_payload("orphan", "orphan@example.com", 77)).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = parse_body(res).await;
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 1);
    assert_eq!(detail[0]["loc"], json!(["body", "user_type_id"]));
    assert_eq!(detail[0]["type"], "not_found");
    assert!(detail[0]["msg"].as_str().unwrap().contains("77"));
}

#[tokio::test]
async fn test_create_user_accumulates_all_errors() {
    let app = TestApp::new().await;
    let type_id = create_user_type(&app, "Student").await;

    let res = post_user(&app, &user_payload("first", "taken@example.com", type_id)).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    // Taken email and a dangling type id in one request: both reported,
    // conflict wins the status.
    let res = post_user(&app, &user_payload("second", "taken@example.com", 77)).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let body = parse_body(res).await;
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 2);
}

#[tokio::test]
async fn test_create_user_invalid_email_rejected_before_service() {
    let app = TestApp::new().await;
    let type_id = create_user_type(&app, "Student").await;

    let res = post_user(&app, &user_payload("baduser", "not-an-email", type_id)).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let count = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/users/count")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(parse_body(count).await.as_i64().unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_username_caught_by_store_constraint() {
    let app = TestApp::new().await;
    let type_id = create_user_type(&app, "Student").await;

    let res = post_user(&app, &user_payload("samename", "one@example.com", type_id)).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    // No pre-check exists for usernames; the unique constraint reports this
    // one and it must still surface as a conflict.
    let res = post_user(&app, &user_payload("samename", "two@example.com", type_id)).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let body = parse_body(res).await;
    assert!(body["error"].as_str().unwrap().contains("User already exists"));
}

#[tokio::test]
async fn test_user_activation_lifecycle_guards() {
    let app = TestApp::new().await;
    let type_id = create_user_type(&app, "Student").await;

    let res = post_user(&app, &user_payload("lifecycle", "lifecycle@example.com", type_id)).await;
    let user_id = parse_body(res).await["user_id"].as_i64().unwrap();

    let deactivated = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/v1/users/{}/deactivate", user_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deactivated.status(), StatusCode::OK);
    assert_eq!(parse_body(deactivated).await["is_active"], false);

    let again = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/v1/users/{}/deactivate", user_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let activated = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/v1/users/{}/activate", user_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(activated.status(), StatusCode::OK);
    assert_eq!(parse_body(activated).await["is_active"], true);

    let again = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/v1/users/{}/activate", user_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_deactivate_missing_user() {
    let app = TestApp::new().await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/v1/users/404/deactivate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users_filtered_by_user_type() {
    let app = TestApp::new().await;
    let admins = create_user_type(&app, "Admin").await;
    let students = create_user_type(&app, "Student").await;

    post_user(&app, &user_payload("admin1", "admin1@example.com", admins)).await;
    post_user(&app, &user_payload("student1", "student1@example.com", students)).await;
    post_user(&app, &user_payload("student2", "student2@example.com", students)).await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/v1/users?user_type_id={}", students))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let users = parse_body(res).await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u["user_type_id"].as_i64().unwrap() == students));

    let unknown = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/users?user_type_id=999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
}
