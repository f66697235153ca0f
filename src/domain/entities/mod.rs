pub mod article;
pub mod category;
pub mod interaction_event;
