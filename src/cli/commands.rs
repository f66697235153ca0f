use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "readnext", about = "Related-article recommendations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a category (no-op if it already exists)
    AddCategory {
        name: String,
    },
    /// Add an article
    AddArticle {
        /// JSON data with title, body, and optional category name
        json: String,
    },
    /// List all articles
    Articles,
    /// List all categories
    Categories,
    /// Log a reader interaction
    Log {
        article_id: i64,
        /// Event type (view, like, time_spent)
        event_type: String,
        #[arg(long)]
        user_id: Option<i64>,
        /// Dwell time in milliseconds (required for time_spent)
        #[arg(long)]
        duration_ms: Option<i64>,
    },
    /// Recommend related articles
    Recommend {
        article_id: i64,
        /// Strategy (popular, content, hybrid); unknown names fall back to popular
        #[arg(long)]
        strategy: Option<String>,
        /// Maximum results (defaults to READNEXT_LIMIT)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Engagement totals and top keywords for an article
    Analytics {
        article_id: i64,
        #[arg(long, default_value = "3")]
        top: usize,
    },
    /// Most distinctive keywords of an article
    Keywords {
        article_id: i64,
        #[arg(long, default_value = "3")]
        top: usize,
    },
}
