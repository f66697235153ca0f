use std::sync::Arc;

use tracing::info;

use crate::domain::entities::article::Article;
use crate::domain::entities::category::Category;
use crate::domain::error::DomainError;
use crate::domain::ports::catalog_repository::CatalogRepository;

pub struct CatalogUseCase {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogUseCase {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    pub fn add_category(&self, name: &str) -> Result<Category, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("Category name must not be empty".into()));
        }
        self.repo.create_or_get_category(name)
    }

    /// Add an article, creating its category on demand.
    pub fn add_article(
        &self,
        title: &str,
        body: &str,
        category: Option<&str>,
    ) -> Result<Article, DomainError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidInput("Article title must not be empty".into()));
        }
        let category_id = match category.map(str::trim).filter(|c| !c.is_empty()) {
            Some(name) => Some(self.repo.create_or_get_category(name)?.id),
            None => None,
        };
        let article = self.repo.add_article(title, body.trim(), category_id)?;
        info!(id = article.id, title = %article.title, "article added");
        Ok(article)
    }

    pub fn list_articles(&self) -> Result<Vec<Article>, DomainError> {
        self.repo.list_articles()
    }

    pub fn get_article(&self, id: i64) -> Result<Option<Article>, DomainError> {
        self.repo.get_article(id)
    }

    pub fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        self.repo.list_categories()
    }
}
