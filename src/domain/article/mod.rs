pub mod entity;
pub mod invariants;

pub use entity::Article;
pub use invariants::{
    validate_article_links, validate_article_title, validate_author_link, validate_magazine_link,
};
