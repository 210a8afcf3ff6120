mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::{choose_next_question, quizzes_router};

use super::error::ApiError;

pub type ApiResponse<T> = Result<T, ApiError>;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Cuts the 1-indexed `page` out of `items`.
///
/// Pages below 1 and pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let Some(start) = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return Vec::new();
    };
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_holds_first_ten() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(items, 1), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(items, 3), vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<i64> = (1..=25).collect();
        assert!(paginate(items.clone(), 4).is_empty());
        assert!(paginate(items.clone(), 0).is_empty());
        assert!(paginate(items.clone(), -3).is_empty());
        assert!(paginate(items, i64::MAX).is_empty());
        assert!(paginate(Vec::<i64>::new(), 1).is_empty());
    }
}
