pub mod analytics;
pub mod catalog;
pub mod engagement;
pub mod factory;
pub mod recommend;
pub mod relevance;
pub mod strategies;
