//! HTTP-level integration tests for the category endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations", fixtures("categories"))]
async fn list_categories_returns_mapping_and_total(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["total_categories"], 2);
    assert_eq!(json["categories"]["1"], "Science");
    assert_eq!(json["categories"]["2"], "Art");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_categories_with_empty_table_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categories").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
    assert_eq!(json["message"], "Resource Not Found");
}

// ---------------------------------------------------------------------------
// GET /categories/{id}/questions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations", fixtures("categories", "questions"))]
async fn category_questions_are_scoped_to_the_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categories/1/questions").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["current_category"], 1);
    assert_eq!(json["total_questions"], 2);

    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    assert!(questions.iter().all(|q| q["category"] == 1));
}

#[sqlx::test(migrations = "../db/migrations", fixtures("categories", "questions"))]
async fn category_questions_respect_page_size(pool: PgPool) {
    // Category 2 has 10 questions: exactly one full page.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/categories/2/questions").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["total_questions"], 10);

    // An out-of-range page stays 200 with an empty list on this
    // endpoint, unlike /questions.
    let app = common::build_test_app(pool);
    let response = get(app, "/categories/2/questions?page=5").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["questions"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations", fixtures("categories"))]
async fn unknown_category_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categories/999/questions").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 422);
    assert_eq!(json["message"], "Unprocessable Entity");
}
