mod common;

use common::{newsroom, FakeCorpus, FakeEvents};
use readnext::application::factory::StrategyFactory;
use readnext::domain::values::strategy_kind::StrategyKind;

fn kind_for(name: &str) -> StrategyKind {
    StrategyFactory::create(name, FakeCorpus::new(newsroom()), FakeEvents::empty()).kind()
}

#[test]
fn test_popular_names() {
    assert_eq!(kind_for("popular"), StrategyKind::Popularity);
    assert_eq!(kind_for("Popular"), StrategyKind::Popularity);
}

#[test]
fn test_content_names() {
    for name in ["content", "content_based", "content-based", "CONTENT"] {
        assert_eq!(kind_for(name), StrategyKind::ContentBased, "{name}");
    }
}

#[test]
fn test_hybrid_names() {
    for name in ["hybrid", "mixed", "mix", "combined", " Mixed "] {
        assert_eq!(kind_for(name), StrategyKind::Hybrid, "{name}");
    }
}

#[test]
fn test_unknown_and_empty_default_to_popularity() {
    for name in ["", "   ", "random", "collaborative-filtering"] {
        assert_eq!(kind_for(name), StrategyKind::Popularity, "{name:?}");
    }
}

#[test]
fn test_for_kind_round_trips() {
    for kind in [StrategyKind::Popularity, StrategyKind::ContentBased, StrategyKind::Hybrid] {
        let s = StrategyFactory::for_kind(kind, FakeCorpus::new(vec![]), FakeEvents::empty());
        assert_eq!(s.kind(), kind);
    }
}
