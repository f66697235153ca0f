use crate::domain::error::DomainError;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS articles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            category_id INTEGER REFERENCES categories(id),
            body TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS interaction_events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            article_id INTEGER NOT NULL REFERENCES articles(id),
            user_id INTEGER,
            event_type TEXT NOT NULL,
            duration_ms INTEGER,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_articles_category ON articles(category_id);
        CREATE INDEX IF NOT EXISTS idx_events_article_type
            ON interaction_events(article_id, event_type);
        "
    ).map_err(|e| DomainError::Database(format!("Migration failed: {e}")))
}
