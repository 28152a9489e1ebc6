use crate::domain::constraints::{MAGAZINE_CATEGORY, MAGAZINE_NAME};
use crate::error::{Field, ValidationResult};

/// Name is 2 to 16 characters inclusive
pub fn validate_magazine_name(name: &str) -> ValidationResult<()> {
    MAGAZINE_NAME.check(Field::MagazineName, name)
}

/// Category must be non-empty after trimming
pub fn validate_magazine_category(category: &str) -> ValidationResult<()> {
    MAGAZINE_CATEGORY.check(Field::MagazineCategory, category)
}

/// Magazine invariants:
///
/// 1. Name length stays within [2, 16] across every assignment
/// 2. Category is never blank
/// 3. A rejected assignment leaves the field untouched
/// 4. Magazines own no articles; they are discovered through the registry

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Magazine;
    use crate::error::ValidationErrorKind;
    use crate::events::MagazineRevised;
    use crate::registry::ArticleRegistry;
    use std::sync::{Arc, RwLock};

    #[test]
    fn test_name_length_boundaries() {
        let registry = ArticleRegistry::new();
        assert!(Magazine::with_registry(&registry, "ab", "News").is_ok());
        assert!(Magazine::with_registry(&registry, "a".repeat(16), "News").is_ok());

        for name in ["a".to_string(), "a".repeat(17), String::new()] {
            let err = Magazine::with_registry(&registry, name, "News").unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::LengthOutOfRange);
            assert_eq!(err.field(), Field::MagazineName);
        }
    }

    #[test]
    fn test_blank_category_fails() {
        let registry = ArticleRegistry::new();
        let err = Magazine::with_registry(&registry, "Tech Weekly", "  ").unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::Empty);
        assert_eq!(err.field(), Field::MagazineCategory);
    }

    #[test]
    fn test_name_is_checked_before_category() {
        let registry = ArticleRegistry::new();
        let err = Magazine::with_registry(&registry, "x", "").unwrap_err();
        assert_eq!(err.field(), Field::MagazineName);
    }

    #[test]
    fn test_reassignment_is_revalidated() {
        let registry = ArticleRegistry::new();
        let mag = Magazine::with_registry(&registry, "Tech Weekly", "Technology").unwrap();

        mag.set_name("Tech Daily").unwrap();
        mag.set_category("Science").unwrap();
        assert_eq!(mag.name(), "Tech Daily");
        assert_eq!(mag.category(), "Science");

        assert!(mag.set_name("T").is_err());
        assert!(mag.set_name("A Name Far Too Long").is_err());
        assert!(mag.set_category("").is_err());
        assert_eq!(mag.name(), "Tech Daily");
        assert_eq!(mag.category(), "Science");

        mag.set_name("TW").unwrap();
        mag.set_name("Sixteen Chars Ok").unwrap();
        assert_eq!(mag.name(), "Sixteen Chars Ok");
    }

    #[test]
    fn test_rename_is_visible_through_clones() {
        let registry = ArticleRegistry::new();
        let mag = Magazine::with_registry(&registry, "Tech Weekly", "Technology").unwrap();
        let handle = mag.clone();
        mag.set_name("Tech Daily").unwrap();
        assert_eq!(handle.name(), "Tech Daily");
        assert_eq!(handle.to_string(), "Tech Daily");
    }

    #[test]
    fn test_successful_reassignment_emits_revision() {
        let registry = ArticleRegistry::new();
        let revisions = Arc::new(RwLock::new(Vec::new()));
        let revisions_clone = Arc::clone(&revisions);
        registry.events().subscribe::<MagazineRevised, _>(move |event| {
            revisions_clone
                .write()
                .unwrap()
                .push((event.field, event.old_value.clone(), event.new_value.clone()));
        });

        let mag = Magazine::with_registry(&registry, "Tech Weekly", "Technology").unwrap();
        mag.set_category("Science").unwrap();
        let _ = mag.set_name("X");

        assert_eq!(
            *revisions.read().unwrap(),
            vec![(
                Field::MagazineCategory,
                "Technology".to_string(),
                "Science".to_string()
            )]
        );
    }
}
