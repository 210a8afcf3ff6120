use serde::{Deserialize, Deserializer};

pub const FIRST_PAGE: i64 = 1;

#[derive(Deserialize, Debug)]
pub struct PageQuery {
    #[serde(default = "first_page")]
    #[serde(deserialize_with = "deserialize_lenient_page")]
    pub page: i64,
}

fn first_page() -> i64 {
    FIRST_PAGE
}

// `?page=abc` falls back to the first page instead of rejecting the request
pub fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(FIRST_PAGE))
}

#[cfg(test)]
mod tests {
    use axum::{extract::Query, http::Uri};

    use super::*;

    fn parse(query: &str) -> i64 {
        let uri: Uri = format!("http://localhost/questions?{query}").parse().unwrap();
        let Query(parsed) = Query::<PageQuery>::try_from_uri(&uri).unwrap();
        parsed.page
    }

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(parse(""), 1);
    }

    #[test]
    fn page_is_parsed() {
        assert_eq!(parse("page=3"), 3);
        assert_eq!(parse("page=0"), 0);
    }

    #[test]
    fn garbage_page_falls_back_to_first() {
        assert_eq!(parse("page=abc"), 1);
        assert_eq!(parse("page="), 1);
    }
}
