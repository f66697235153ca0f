use serde::{Deserialize, Serialize};

/// An article as handed to the engine by the corpus provider.
///
/// Immutable for the duration of a ranking pass; strategies clone it into
/// their results but never modify it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub category_id: Option<i64>,
    pub body: String,
    /// Denormalized display label joined in from the categories table.
    pub category_name: Option<String>,
}

impl Article {
    /// Text representation used for relevance scoring: title, body and
    /// category name, each trimmed, joined by single spaces.
    pub fn document_text(&self) -> String {
        let title = self.title.trim();
        let body = self.body.trim();
        let category = self.category_name.as_deref().unwrap_or("").trim();
        format!("{title} {body} {category}")
    }

    /// Whether `other` falls in the same category as `self`.
    ///
    /// Only a known category id counts; an article without one shares a
    /// category with nothing, whatever its display name says.
    pub fn shares_category_with(&self, other: &Article) -> bool {
        match self.category_id {
            Some(id) => other.category_id == Some(id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: i64, category_id: Option<i64>, category_name: Option<&str>) -> Article {
        Article {
            id,
            title: format!("Title {id}"),
            category_id,
            body: "body".into(),
            category_name: category_name.map(String::from),
        }
    }

    #[test]
    fn test_document_text_trims_fields() {
        let a = Article {
            id: 1,
            title: "  Rust  ".into(),
            category_id: None,
            body: "\tfast code\n".into(),
            category_name: Some(" Tech ".into()),
        };
        assert_eq!(a.document_text(), "Rust fast code Tech");
    }

    #[test]
    fn test_document_text_missing_category() {
        let a = article(1, None, None);
        assert_eq!(a.document_text(), "Title 1 body ");
    }

    #[test]
    fn test_shares_category_by_id() {
        let src = article(1, Some(7), Some("Tech"));
        assert!(src.shares_category_with(&article(2, Some(7), None)));
        assert!(!src.shares_category_with(&article(3, Some(8), Some("Tech"))));
    }

    #[test]
    fn test_unknown_category_id_matches_nothing() {
        let src = article(1, None, Some("Travel"));
        assert!(!src.shares_category_with(&article(2, Some(3), Some("Travel"))));
        assert!(!src.shares_category_with(&article(3, None, Some("Travel"))));
        assert!(!article(1, None, None).shares_category_with(&article(2, None, None)));
    }
}
