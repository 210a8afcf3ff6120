#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tower::ServiceExt;
use trivia_api::db::{self, queries::questions, NewQuestion};

pub async fn create_test_pool() -> SqlitePool {
    // a single connection that never expires keeps the in-memory database alive
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open test database");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    pool
}

pub async fn insert_question(pool: &SqlitePool, question: &str, answer: &str, category: i64) -> i64 {
    questions::create_question(
        pool,
        &NewQuestion {
            question: question.to_owned(),
            answer: answer.to_owned(),
            category,
            difficulty: 1,
        },
    )
    .await
    .expect("failed to insert question")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::get(uri)
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(
        app,
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub fn assert_error(response: &TestResponse, status: u16, message: &str) {
    assert_eq!(response.status.as_u16(), status);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["status"], status);
    assert_eq!(response.body["message"], message);
}

pub fn ids(questions: &Value) -> Vec<i64> {
    questions
        .as_array()
        .expect("questions is not an array")
        .iter()
        .map(|q| q["id"].as_i64().expect("question without id"))
        .collect()
}
