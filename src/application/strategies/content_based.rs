//! Content-based strategy.
//!
//! Scores every other article by TF-IDF similarity to the source article,
//! then treats a category match as a hard partition: all same-category
//! candidates rank ahead of all others, each bucket ordered by similarity.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::application::relevance::TextRelevanceModel;
use crate::domain::entities::article::Article;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;
use crate::domain::ports::recommender::Recommender;
use crate::domain::values::strategy_kind::StrategyKind;

pub struct ContentBasedStrategy {
    articles: Arc<dyn ArticleSource>,
}

impl ContentBasedStrategy {
    pub fn new(articles: Arc<dyn ArticleSource>) -> Self {
        Self { articles }
    }
}

fn by_similarity_desc(a: &(Article, f64), b: &(Article, f64)) -> std::cmp::Ordering {
    b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
}

impl Recommender for ContentBasedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ContentBased
    }

    fn recommend(&self, article_id: i64, limit: usize) -> Result<Vec<Article>, DomainError> {
        if limit == 0 {
            return Ok(vec![]);
        }
        let Some(source) = self.articles.get_article(article_id)? else {
            debug!(article_id, "source article missing, nothing to recommend");
            return Ok(vec![]);
        };

        let mut seen: HashSet<i64> = HashSet::from([article_id]);
        let candidates: Vec<Article> = self
            .articles
            .list_articles()?
            .into_iter()
            .filter(|a| seen.insert(a.id))
            .collect();
        if candidates.is_empty() {
            return Ok(vec![]);
        }

        // The source document goes last so candidate indices line up with
        // `candidates` whether or not the listing contains the source.
        let mut documents: Vec<String> = candidates.iter().map(Article::document_text).collect();
        documents.push(source.document_text());
        let focus = candidates.len();

        let Some(model) = TextRelevanceModel::fit(&documents) else {
            debug!(article_id, "corpus carries no terms, nothing to recommend");
            return Ok(vec![]);
        };

        let mut same_category = Vec::new();
        let mut other = Vec::new();
        for (article, (_, similarity)) in candidates.into_iter().zip(model.similarities(focus)) {
            if source.shares_category_with(&article) {
                same_category.push((article, similarity));
            } else {
                other.push((article, similarity));
            }
        }
        same_category.sort_by(by_similarity_desc);
        other.sort_by(by_similarity_desc);

        debug!(
            article_id,
            same_category = same_category.len(),
            other = other.len(),
            "content ranking"
        );
        Ok(same_category
            .into_iter()
            .chain(other)
            .take(limit)
            .map(|(a, _)| a)
            .collect())
    }
}
