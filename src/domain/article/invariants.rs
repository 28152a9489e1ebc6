use crate::domain::constraints::ARTICLE_TITLE;
use crate::domain::{Author, Magazine};
use crate::error::{Field, ValidationError, ValidationResult};
use crate::registry::ArticleRegistry;

/// Title is 5 to 50 characters inclusive
pub fn validate_article_title(title: &str) -> ValidationResult<()> {
    ARTICLE_TITLE.check(Field::ArticleTitle, title)
}

/// Author and magazine must be bound to the same registry
pub fn validate_article_links(author: &Author, magazine: &Magazine) -> ValidationResult<()> {
    validate_magazine_link(author.registry(), magazine)
}

/// `author` may be linked from an article living in `registry`
pub fn validate_author_link(registry: &ArticleRegistry, author: &Author) -> ValidationResult<()> {
    if !registry.same_registry(author.registry()) {
        return Err(ValidationError::TypeMismatch {
            field: Field::ArticleAuthor,
            reason: format!("author {} belongs to a different registry", author.id()),
        });
    }
    Ok(())
}

/// `magazine` may be linked from an article living in `registry`
pub fn validate_magazine_link(
    registry: &ArticleRegistry,
    magazine: &Magazine,
) -> ValidationResult<()> {
    if !registry.same_registry(magazine.registry()) {
        return Err(ValidationError::TypeMismatch {
            field: Field::ArticleMagazine,
            reason: format!("magazine {} belongs to a different registry", magazine.id()),
        });
    }
    Ok(())
}

/// Article invariants:
///
/// 1. Title length is within [5, 50] and never changes
/// 2. Author and magazine always share the article's registry
/// 3. Construction validates everything before the single registry append
/// 4. Reassigning author or magazine never moves the article in registry order
