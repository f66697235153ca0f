pub mod engagement;
pub mod event_type;
pub mod strategy_kind;
