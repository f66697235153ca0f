pub mod content_based;
pub mod hybrid;
pub mod popularity;
