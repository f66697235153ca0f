use crate::domain::entities::article::Article;
use crate::domain::entities::category::Category;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;
use crate::domain::ports::catalog_repository::CatalogRepository;
use crate::infrastructure::sqlite::{lock, SharedConnection};
use rusqlite::{params, Connection, OptionalExtension};

/// Articles joined with their category name. Listing order is by id so the
/// corpus order is stable across calls.
const SELECT_ARTICLES: &str = "SELECT a.id, a.title, a.category_id, a.body, c.name
     FROM articles a LEFT JOIN categories c ON c.id = a.category_id";

pub struct SqliteCatalogRepo {
    conn: SharedConnection,
}

impl SqliteCatalogRepo {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    fn row_to_article(row: &rusqlite::Row) -> Result<Article, rusqlite::Error> {
        Ok(Article {
            id: row.get(0)?,
            title: row.get(1)?,
            category_id: row.get(2)?,
            body: row.get(3)?,
            category_name: row.get(4)?,
        })
    }

    fn fetch_article(conn: &Connection, id: i64) -> Result<Option<Article>, DomainError> {
        conn.query_row(
            &format!("{SELECT_ARTICLES} WHERE a.id = ?1"),
            params![id],
            Self::row_to_article,
        )
        .optional()
        .map_err(DomainError::from)
    }
}

impl ArticleSource for SqliteCatalogRepo {
    fn list_articles(&self) -> Result<Vec<Article>, DomainError> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(&format!("{SELECT_ARTICLES} ORDER BY a.id ASC"))?;
        let articles = stmt
            .query_map([], Self::row_to_article)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Database(format!("Failed to read articles: {e}")))?;
        Ok(articles)
    }

    fn get_article(&self, id: i64) -> Result<Option<Article>, DomainError> {
        let conn = lock(&self.conn)?;
        Self::fetch_article(&conn, id)
    }
}

impl CatalogRepository for SqliteCatalogRepo {
    fn create_or_get_category(&self, name: &str) -> Result<Category, DomainError> {
        let conn = lock(&self.conn)?;
        conn.execute(
            "INSERT OR IGNORE INTO categories (name) VALUES (?1)",
            params![name],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add category: {e}")))?;
        conn.query_row(
            "SELECT id, name FROM categories WHERE name = ?1",
            params![name],
            |r| {
                Ok(Category {
                    id: r.get(0)?,
                    name: r.get(1)?,
                })
            },
        )
        .map_err(DomainError::from)
    }

    fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY name")?;
        let categories = stmt
            .query_map([], |r| {
                Ok(Category {
                    id: r.get(0)?,
                    name: r.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    fn add_article(
        &self,
        title: &str,
        body: &str,
        category_id: Option<i64>,
    ) -> Result<Article, DomainError> {
        let conn = lock(&self.conn)?;
        conn.execute(
            "INSERT INTO articles (title, category_id, body) VALUES (?1, ?2, ?3)",
            params![title, category_id, body],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add article: {e}")))?;
        let id = conn.last_insert_rowid();
        Self::fetch_article(&conn, id)?
            .ok_or_else(|| DomainError::NotFound(format!("Article not found after insert: {id}")))
    }
}
