use crate::domain::entities::article::Article;
use crate::domain::error::DomainError;

/// Read access to the article corpus.
///
/// The order returned by [`ArticleSource::list_articles`] is the canonical
/// tie-break order for every strategy, so implementations must return it
/// deterministically.
pub trait ArticleSource: Send + Sync {
    fn list_articles(&self) -> Result<Vec<Article>, DomainError>;
    fn get_article(&self, id: i64) -> Result<Option<Article>, DomainError>;
}
