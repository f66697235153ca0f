use crate::domain::entities::article::Article;
use crate::domain::entities::category::Category;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;

pub trait CatalogRepository: ArticleSource {
    /// Returns the existing category with this name, or creates it.
    fn create_or_get_category(&self, name: &str) -> Result<Category, DomainError>;
    fn list_categories(&self) -> Result<Vec<Category>, DomainError>;
    fn add_article(
        &self,
        title: &str,
        body: &str,
        category_id: Option<i64>,
    ) -> Result<Article, DomainError>;
}
