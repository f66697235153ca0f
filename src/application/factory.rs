use std::sync::Arc;

use crate::application::strategies::content_based::ContentBasedStrategy;
use crate::application::strategies::hybrid::HybridStrategy;
use crate::application::strategies::popularity::PopularityStrategy;
use crate::domain::ports::article_source::ArticleSource;
use crate::domain::ports::engagement_source::EngagementSource;
use crate::domain::ports::recommender::Recommender;
use crate::domain::values::strategy_kind::StrategyKind;

/// Builds a ranking strategy from a requested name.
pub struct StrategyFactory;

impl StrategyFactory {
    /// Never fails: names that [`StrategyKind::from_name`] does not recognize
    /// get the popularity strategy.
    pub fn create(
        strategy_name: &str,
        articles: Arc<dyn ArticleSource>,
        events: Arc<dyn EngagementSource>,
    ) -> Box<dyn Recommender> {
        Self::for_kind(StrategyKind::from_name(strategy_name), articles, events)
    }

    pub fn for_kind(
        kind: StrategyKind,
        articles: Arc<dyn ArticleSource>,
        events: Arc<dyn EngagementSource>,
    ) -> Box<dyn Recommender> {
        match kind {
            StrategyKind::Popularity => Box::new(PopularityStrategy::new(articles, events)),
            StrategyKind::ContentBased => Box::new(ContentBasedStrategy::new(articles)),
            StrategyKind::Hybrid => Box::new(HybridStrategy::new(articles, events)),
        }
    }
}
