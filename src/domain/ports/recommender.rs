//! Recommender port.
//!
//! A [`Recommender`] is one ranking policy. Every implementation upholds the
//! same contract for a call to `recommend(article_id, limit)`:
//!
//! - the article with `article_id` is never part of the result
//! - no article id appears twice
//! - the result holds at most `limit` articles, and none when `limit == 0`
//! - identical collaborator snapshots yield identical ordered results
//!
//! Degenerate inputs (missing source article, empty corpus) produce an empty
//! list. Only collaborator failures surface as errors.

use crate::domain::entities::article::Article;
use crate::domain::error::DomainError;
use crate::domain::values::strategy_kind::StrategyKind;

pub trait Recommender: Send + Sync {
    /// Which policy this is.
    fn kind(&self) -> StrategyKind;

    /// Rank related articles for `article_id`.
    fn recommend(&self, article_id: i64, limit: usize) -> Result<Vec<Article>, DomainError>;
}
