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

async fn get_count(app: &TestApp) -> i64 {
    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/user_types/count")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await.as_i64().unwrap()
}

async fn create_user_type(app: &TestApp, name: &str) -> Value {
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
    parse_body(res).await
}

#[tokio::test]
async fn test_count_starts_empty() {
    let app = TestApp::new().await;
    assert_eq!(get_count(&app).await, 0);
}

#[tokio::test]
async fn test_create_and_fetch_user_type() {
    let app = TestApp::new().await;

    let created = create_user_type(&app, "Admin").await;
    let id = created["user_type_id"].as_i64().unwrap();
    assert_eq!(created["name"], "Admin");
    assert!(created["created_at"].is_string());

    let by_id = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/v1/user_types/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(by_id.status(), StatusCode::OK);
    assert_eq!(parse_body(by_id).await["name"], "Admin");

    let by_name = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/user_types/name/Admin")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(by_name.status(), StatusCode::OK);
    assert_eq!(parse_body(by_name).await["user_type_id"].as_i64().unwrap(), id);

    assert_eq!(get_count(&app).await, 1);
}

#[tokio::test]
async fn test_create_user_type_conflict_leaves_count_unchanged() {
    let app = TestApp::new().await;

    create_user_type(&app, "Student").await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/user_types")
                .header("Content-Type", "application/json")
                .body(Body::from(json!({ "name": "Student" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let body = parse_body(res).await;
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 1);
    assert_eq!(detail[0]["loc"], json!(["body", "name"]));
    assert_eq!(detail[0]["type"], "conflict");

    assert_eq!(get_count(&app).await, 1);
}

#[tokio::test]
async fn test_create_user_type_name_too_short() {
    let app = TestApp::new().await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/user_types")
                .header("Content-Type", "application/json")
                .body(Body::from(json!({ "name": "ab" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(get_count(&app).await, 0);
}

#[tokio::test]
async fn test_get_user_type_not_found() {
    let app = TestApp::new().await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/user_types/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_user_types_pagination() {
    let app = TestApp::new().await;

    create_user_type(&app, "Admin").await;
    create_user_type(&app, "Student").await;
    create_user_type(&app, "Teacher").await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/user_types?skip=1&limit=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let page = parse_body(res).await;
    let items = page.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Student");
}

#[tokio::test]
async fn test_delete_user_type_returns_deleted_record() {
    let app = TestApp::new().await;

    let created = create_user_type(&app, "Temporary").await;
    let id = created["user_type_id"].as_i64().unwrap();

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/user_types/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["user_type_id"].as_i64().unwrap(), id);

    let gone = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/v1/user_types/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_user_type() {
    let app = TestApp::new().await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/user_types/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_type_blocked_by_referencing_user() {
    let app = TestApp::new().await;

    let created = create_user_type(&app, "Student").await;
    let type_id = created["user_type_id"].as_i64().unwrap();

    let user_res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/users")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    json!({
                        "first_name": "John",
                        "last_name": "Doe",
                        "username": "johndoe123",
                        "email": "john.doe@example.com",
                        "age": 21,
                        "user_type_id": type_id,
                        "password": "password1"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(user_res.status(), StatusCode::CREATED);
    let user_id = parse_body(user_res).await["user_id"].as_i64().unwrap();

    let blocked = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/user_types/{}", type_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(blocked.status(), StatusCode::CONFLICT);

    let body = parse_body(blocked).await;
    let message = body["error"].as_str().unwrap();
    assert!(
        message.contains(&format!("/api/v1/users?user_type_id={}", type_id)),
        "conflict message should point at the referencing users: {}",
        message
    );

    // No hard-delete endpoint for users exists; clear the blocking row
    // directly to verify the delete goes through afterwards.
    sqlx::query("DELETE FROM users WHERE user_id = ?")
        .bind(user_id)
        .execute(&app.pool)
        .await
        .unwrap();

    let unblocked = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/user_types/{}", type_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(unblocked.status(), StatusCode::OK);
}
