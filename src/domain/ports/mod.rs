pub mod article_source;
pub mod catalog_repository;
pub mod engagement_source;
pub mod event_repository;
pub mod recommender;
