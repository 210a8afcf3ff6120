use axum::{extract::State, routing::get, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, questions::get_questions_for_category},
        Category, Question,
    },
    server::{
        app::AppState,
        deserializers::PageQuery,
        error::Envelope,
        extractors::{AppPath, AppQuery},
    },
};

use super::{paginate, ApiResponse};

#[derive(Serialize, Debug)]
struct CategoriesPayload {
    categories: Vec<Category>,
}

#[derive(Serialize, Debug)]
struct CategoryQuestionsPayload {
    questions: Vec<Question>,
}

async fn get_categories(
    State(pool): State<SqlitePool>,
) -> ApiResponse<Envelope<CategoriesPayload>> {
    let categories = get_all_categories(&pool).await?;
    Ok(Envelope::ok(
        "successfully fetched all categories",
        CategoriesPayload { categories },
    ))
}

// An empty page is a normal result here, unlike the unfiltered listing.
async fn get_category_questions(
    State(pool): State<SqlitePool>,
    AppPath(category_id): AppPath<i64>,
    AppQuery(query): AppQuery<PageQuery>,
) -> ApiResponse<Envelope<CategoryQuestionsPayload>> {
    let questions = get_questions_for_category(&pool, category_id).await?;
    tracing::debug!(category_id, total = questions.len(), page = query.page);
    Ok(Envelope::ok(
        "successfully returned questions by category",
        CategoryQuestionsPayload {
            questions: paginate(questions, query.page),
        },
    ))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route(
            "/categories/{category_id}/questions",
            get(get_category_questions),
        )
        .with_state(state)
}
