//! HTTP-level integration tests for question listing, creation, and
//! deletion.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete, get, post_json, request};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// GET /questions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations", fixtures("categories", "questions"))]
async fn first_page_holds_ten_questions(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/questions").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["total_questions"], 12);
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["current_category"], serde_json::Value::Null);
    assert_eq!(json["categories"]["1"], "Science");
}

#[sqlx::test(migrations = "../db/migrations", fixtures("categories", "questions"))]
async fn second_page_holds_the_tail(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/questions?page=2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0]["id"], 11);
    assert_eq!(questions[1]["id"], 12);
}

#[sqlx::test(migrations = "../db/migrations", fixtures("categories", "questions"))]
async fn out_of_range_page_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/questions?page=1000").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
    assert_eq!(json["message"], "Resource Not Found");
}

#[sqlx::test(migrations = "../db/migrations", fixtures("categories", "questions"))]
async fn non_numeric_page_falls_back_to_page_one(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/questions?page=abc").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
}

// ---------------------------------------------------------------------------
// POST /questions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations", fixtures("categories", "questions"))]
async fn create_question_returns_201_and_shows_up_in_listing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/questions",
        serde_json::json!({
            "question": "What year did the Berlin Wall fall?",
            "answer": "1989",
            "category": 1,
            "difficulty": 3
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let created_id = json["created_question_id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/questions?page=2").await;
    let json = body_json(response).await;
    assert_eq!(json["total_questions"], 13);
    let ids: Vec<i64> = json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert!(ids.contains(&created_id));
}

#[sqlx::test(migrations = "../db/migrations", fixtures("categories"))]
async fn create_question_with_missing_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/questions",
        serde_json::json!({"question": "Q", "answer": "A", "category": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 400);
    assert_eq!(json["message"], "Bad Request");
}

#[sqlx::test(migrations = "../db/migrations", fixtures("categories"))]
async fn create_question_with_empty_text_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/questions",
        serde_json::json!({"question": "   ", "answer": "A", "category": 1, "difficulty": 2}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations", fixtures("categories"))]
async fn create_question_with_unknown_category_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/questions",
        serde_json::json!({"question": "Q", "answer": "A", "category": 999, "difficulty": 2}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations", fixtures("categories"))]
async fn create_question_with_no_body_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = request(app, Method::POST, "/questions").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Bad Request");
}

// ---------------------------------------------------------------------------
// DELETE /questions/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations", fixtures("categories", "questions"))]
async fn delete_question_removes_the_row(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/questions/5").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["deleted_question_id"], 5);

    // Read-after-delete must not see the row.
    let app = common::build_test_app(pool);
    let response = get(app, "/questions").await;
    let json = body_json(response).await;
    assert_eq!(json["total_questions"], 11);
    assert!(json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .all(|q| q["id"] != 5));
}

#[sqlx::test(migrations = "../db/migrations", fixtures("categories", "questions"))]
async fn delete_nonexistent_question_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/questions/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
}

// ---------------------------------------------------------------------------
// Routing fallbacks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_path_returns_404_in_error_shape(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Resource Not Found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn undefined_verb_returns_405_in_error_shape(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = request(app, Method::PUT, "/questions").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 405);
    assert_eq!(json["message"], "Method Not Allowed");
}
