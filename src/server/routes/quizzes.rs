use std::collections::HashSet;

use axum::{extract::State, routing::post, Router};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions::get_questions_for_category, Question},
    server::{
        app::AppState,
        error::{ApiError, Envelope},
        extractors::AppJson,
    },
    telemetry::QUIZ_QUESTIONS_CNTR,
};

use super::ApiResponse;

#[derive(Deserialize, Debug)]
struct QuizCategory {
    id: i64,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

#[derive(Deserialize, Debug)]
struct QuizRequest {
    #[serde(default)]
    previous_questions: Vec<i64>,
    quiz_category: Option<QuizCategory>,
}

#[derive(Serialize, Debug)]
struct NextQuestion {
    question: Option<Question>,
}

/// Picks a question uniformly at random among those whose id is not in
/// `previous`. Returns `None` once the category is exhausted.
pub fn choose_next_question<R: Rng>(
    questions: Vec<Question>,
    previous: &[i64],
    rng: &mut R,
) -> Option<Question> {
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let mut candidates: Vec<Question> = questions
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    AppJson(body): AppJson<QuizRequest>,
) -> ApiResponse<Envelope<NextQuestion>> {
    let category = body
        .quiz_category
        .ok_or_else(|| ApiError::Unprocessable("quiz_category is missing".to_owned()))?;
    let previous = body.previous_questions;

    let questions = get_questions_for_category(&pool, category.id).await?;
    let next = choose_next_question(questions, &previous, &mut rand::thread_rng());

    tracing::debug!(
        category_id = category.id,
        category_type = category.kind.as_deref().unwrap_or_default(),
        seen = previous.len(),
        next = ?next.as_ref().map(|q| q.id),
        "Quiz turn"
    );
    if next.is_some() {
        QUIZ_QUESTIONS_CNTR
            .with_label_values(&[category.id.to_string().as_str()])
            .inc();
    }

    Ok(Envelope::ok(
        "successfully returned questions by category",
        NextQuestion { question: next },
    ))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
