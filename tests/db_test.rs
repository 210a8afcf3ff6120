mod common;

use common::{create_test_pool, insert_question};
use trivia_api::db::queries::{categories, questions};
use trivia_api::db::{Category, Question};
use trivia_api::seed::{export_data, import_data};

#[tokio::test]
async fn question_round_trips_through_storage() {
    let pool = create_test_pool().await;

    let id = insert_question(&pool, "Which continent is Uganda", "Africa", 3).await;

    let stored = questions::get_question(&pool, id).await.unwrap();
    assert_eq!(
        stored,
        Some(Question {
            id,
            question: "Which continent is Uganda".into(),
            answer: "Africa".into(),
            category: 3,
            difficulty: 1,
        })
    );
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let pool = create_test_pool().await;
    let id = insert_question(&pool, "Q", "A", 1).await;

    assert!(questions::delete_question(&pool, id).await.unwrap());
    assert!(!questions::delete_question(&pool, id).await.unwrap());
    assert!(questions::get_question(&pool, id).await.unwrap().is_none());
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let pool = create_test_pool().await;
    let first = insert_question(&pool, "Q1", "A", 1).await;
    questions::delete_question(&pool, first).await.unwrap();

    let second = insert_question(&pool, "Q2", "A", 1).await;

    assert!(second > first);
}

#[tokio::test]
async fn category_filter_keeps_creation_order() {
    let pool = create_test_pool().await;
    let a = insert_question(&pool, "A", "A", 4).await;
    insert_question(&pool, "B", "B", 5).await;
    let c = insert_question(&pool, "C", "C", 4).await;

    let found: Vec<i64> = questions::get_questions_for_category(&pool, 4)
        .await
        .unwrap()
        .into_iter()
        .map(|q| q.id)
        .collect();

    assert_eq!(found, vec![a, c]);
}

#[tokio::test]
async fn import_upserts_categories_by_id() {
    let pool = create_test_pool().await;

    categories::import_categories(
        &pool,
        vec![
            Category {
                id: 6,
                kind: "Football".into(),
            },
            Category {
                id: 7,
                kind: "Music".into(),
            },
        ],
    )
    .await
    .unwrap();

    let all = categories::get_all_categories(&pool).await.unwrap();
    assert_eq!(all.len(), 7);
    assert_eq!(all[5].kind, "Football");
    assert_eq!(all[6].kind, "Music");
}

#[tokio::test]
async fn export_then_import_restores_questions() {
    let source = create_test_pool().await;
    insert_question(&source, "Which continent is Uganda", "Africa", 3).await;
    insert_question(&source, "Who painted the Mona Lisa?", "Leonardo da Vinci", 2).await;
    let dir = tempfile::tempdir().unwrap();

    export_data(&source, dir.path()).await.unwrap();
    let target = create_test_pool().await;
    import_data(&target, dir.path()).await.unwrap();

    assert_eq!(
        questions::get_all_questions(&target).await.unwrap(),
        questions::get_all_questions(&source).await.unwrap()
    );
    assert_eq!(
        categories::get_all_categories(&target).await.unwrap(),
        categories::get_all_categories(&source).await.unwrap()
    );
}
