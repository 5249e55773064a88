use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn setup_app() -> (Router, PgPool) {
    dotenvy::dotenv().ok();
    assert!(
        env::var("DATABASE_URL").is_ok(),
        "DATABASE_URL must point at a PostgreSQL database for ignored tests"
    );

    let config = trivia_api::config::Config::from_env().expect("config");
    let pool = trivia_api::database::pool::create_pool(&config)
        .await
        .expect("pool");
    trivia_api::database::pool::run_migrations(&pool)
        .await
        .expect("migrations");

    let state = trivia_api::AppState::new(pool.clone());
    let app = trivia_api::routes::build_router(state);
    (app, pool)
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null))
}

// Case-insensitive search only holds against the real ILIKE query.
#[tokio::test]
#[ignore = "needs PostgreSQL; run with DATABASE_URL set and `cargo test -- --ignored`"]
async fn question_lifecycle_end_to_end() {
    let (app, pool) = setup_app().await;

    let marker = Uuid::new_v4().simple().to_string();
    let category_type = format!("Category {}", marker);
    let category_id: i32 =
        sqlx::query_scalar("INSERT INTO categories (type) VALUES ($1) RETURNING id")
            .bind(&category_type)
            .fetch_one(&pool)
            .await
            .expect("seed category");

    let (status, body) = call(&app, "GET", "/api/v1/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["total_categories"].as_u64().unwrap() as usize,
        body["categories"].as_object().unwrap().len()
    );
    assert_eq!(body["categories"][category_id.to_string()], json!(category_type));

    let mut created = Vec::new();
    for n in 0..2 {
        let (status, body) = call(
            &app,
            "POST",
            "/api/v1/questions",
            Some(json!({
                "question": format!("Marker {} question {}", marker, n),
                "answer": "Answer",
                "difficulty": 3,
                "category": category_id,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        created.push(body["created"].as_i64().unwrap());
    }

    let (status, body) = call(
        &app,
        "POST",
        "/api/v1/questions/search",
        Some(json!({"searchTerm": format!("MARKER {}", marker.to_uppercase())})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], json!(2));

    let (status, body) = call(
        &app,
        "GET",
        &format!("/api/v1/categories/{}/questions", category_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 2);
    assert_eq!(body["current_category"][category_id.to_string()], json!(category_type));

    let (status, body) = call(
        &app,
        "POST",
        "/api/v1/quizzes",
        Some(json!({
            "previous_questions": [created[0]],
            "quiz_category": {"type": category_type, "id": category_id},
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"].as_i64(), Some(created[1]));

    let (status, _) = call(
        &app,
        "POST",
        "/api/v1/quizzes",
        Some(json!({
            "previous_questions": created.clone(),
            "quiz_category": {"type": category_type, "id": category_id},
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for id in &created {
        let uri = format!("/api/v1/questions/{}", id);
        let (status, body) = call(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question_deleted"].as_i64(), Some(*id));

        let (status, body) = call(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], json!(false));
    }

    let (status, _) = call(
        &app,
        "POST",
        "/api/v1/questions/search",
        Some(json!({"searchTerm": marker})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(category_id)
        .execute(&pool)
        .await
        .expect("cleanup category");
}
