use axum::{
    extract::State,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, questions},
        Category, NewQuestion, Question,
    },
    server::{
        app::AppState,
        deserializers::PageQuery,
        error::{ApiError, Envelope, NoPayload},
        extractors::{AppJson, AppPath, AppQuery},
    },
    telemetry::{QUESTIONS_CREATED_CNTR, QUESTIONS_DELETED_CNTR},
};

use super::{paginate, ApiResponse};

/// Body of `POST /questions`. Every field is required, but only absence
/// is rejected: empty strings and zeros are stored as given.
#[derive(Deserialize, Debug)]
struct NewQuestionRequest {
    question: Option<String>,
    answer: Option<String>,
    category: Option<i64>,
    difficulty: Option<i64>,
}

impl TryFrom<NewQuestionRequest> for NewQuestion {
    type Error = ApiError;

    fn try_from(body: NewQuestionRequest) -> Result<Self, Self::Error> {
        match body {
            NewQuestionRequest {
                question: Some(question),
                answer: Some(answer),
                category: Some(category),
                difficulty: Some(difficulty),
            } => Ok(NewQuestion {
                question,
                answer,
                category,
                difficulty,
            }),
            incomplete => Err(ApiError::BadRequest(format!(
                "incomplete question: {incomplete:?}"
            ))),
        }
    }
}

#[derive(Deserialize, Debug)]
struct SearchRequest {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize, Debug)]
struct QuestionsPage {
    questions: Vec<Question>,
    total_questions: usize,
    categories: Vec<Category>,
}

#[derive(Serialize, Debug)]
struct CreatedQuestion {
    created_question: i64,
}

#[derive(Serialize, Debug)]
struct FoundQuestions {
    questions: Vec<Question>,
}

async fn get_questions(
    State(pool): State<SqlitePool>,
    AppQuery(query): AppQuery<PageQuery>,
) -> ApiResponse<Envelope<QuestionsPage>> {
    let all_questions = questions::get_all_questions(&pool).await?;
    let categories = get_all_categories(&pool).await?;

    let total_questions = all_questions.len();
    let page = paginate(all_questions, query.page);
    // also covers the case of no questions at all
    if page.is_empty() {
        return Err(ApiError::NotFound(format!(
            "page {} of {total_questions} questions",
            query.page
        )));
    }

    Ok(Envelope::ok(
        "successfully fetched questions",
        QuestionsPage {
            questions: page,
            total_questions,
            categories,
        },
    ))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> ApiResponse<Envelope<NoPayload>> {
    if questions::get_question(&pool, id).await?.is_none() {
        return Err(ApiError::NotFound(format!("question {id}")));
    }
    if !questions::delete_question(&pool, id).await? {
        // removed by a concurrent request between lookup and delete
        return Err(ApiError::NotFound(format!("question {id}")));
    }
    QUESTIONS_DELETED_CNTR.inc();
    tracing::info!(id, "Deleted question");
    Ok(Envelope::ok("successfully deleted question", NoPayload {}))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    AppJson(body): AppJson<NewQuestionRequest>,
) -> ApiResponse<Envelope<CreatedQuestion>> {
    let new_question = NewQuestion::try_from(body)?;
    let id = questions::create_question(&pool, &new_question).await?;
    QUESTIONS_CREATED_CNTR.inc();
    tracing::info!(id, category = new_question.category, "Created question");
    Ok(Envelope::created(
        "successfully created a question",
        CreatedQuestion {
            created_question: id,
        },
    ))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    AppJson(body): AppJson<SearchRequest>,
) -> ApiResponse<Envelope<FoundQuestions>> {
    let term = body.search_term.unwrap_or_default();
    let found = questions::search_questions(&pool, &term).await?;
    tracing::debug!(term = %term, found = found.len(), "Searched questions");
    Ok(Envelope::ok(
        "successfully found questions",
        FoundQuestions { questions: found },
    ))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(get_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
