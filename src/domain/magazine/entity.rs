use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::invariants::{validate_magazine_category, validate_magazine_name};
use crate::error::{Field, ValidationResult};
use crate::events::MagazineRevised;
use crate::registry::ArticleRegistry;

/// A publication. Name and category may change; identity never does.
///
/// Clones are handles to the same magazine, so a rename is visible through
/// every article that references it.
#[derive(Clone)]
pub struct Magazine {
    inner: Arc<MagazineInner>,
}

struct MagazineInner {
    id: Uuid,
    created_at: DateTime<Utc>,
    registry: ArticleRegistry,
    fields: RwLock<MagazineFields>,
}

struct MagazineFields {
    name: String,
    category: String,
}

impl Magazine {
    /// Create a magazine bound to the process-wide registry
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> ValidationResult<Self> {
        Self::with_registry(&ArticleRegistry::global(), name, category)
    }

    pub fn with_registry(
        registry: &ArticleRegistry,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let category = category.into();
        validate_magazine_name(&name)?;
        validate_magazine_category(&category)?;

        Ok(Self {
            inner: Arc::new(MagazineInner {
                id: Uuid::new_v4(),
                created_at: Utc::now(),
                registry: registry.clone(),
                fields: RwLock::new(MagazineFields { name, category }),
            }),
        })
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    pub fn registry(&self) -> &ArticleRegistry {
        &self.inner.registry
    }

    pub fn name(&self) -> String {
        self.read_fields(|fields| fields.name.clone())
    }

    pub fn category(&self) -> String {
        self.read_fields(|fields| fields.category.clone())
    }

    /// Rename. On error the current name is kept.
    pub fn set_name(&self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        if let Err(e) = validate_magazine_name(&name) {
            log::debug!("rejected rename of magazine {}: {}", self.inner.id, e);
            return Err(e);
        }

        let old = self.write_fields(|fields| std::mem::replace(&mut fields.name, name.clone()));
        self.revised(Field::MagazineName, old, name);
        Ok(())
    }

    /// Recategorise. On error the current category is kept.
    pub fn set_category(&self, category: impl Into<String>) -> ValidationResult<()> {
        let category = category.into();
        if let Err(e) = validate_magazine_category(&category) {
            log::debug!("rejected recategorisation of magazine {}: {}", self.inner.id, e);
            return Err(e);
        }

        let old = self.write_fields(|fields| {
            std::mem::replace(&mut fields.category, category.clone())
        });
        self.revised(Field::MagazineCategory, old, category);
        Ok(())
    }

    fn read_fields<T>(&self, f: impl FnOnce(&MagazineFields) -> T) -> T {
        f(&self.inner.fields.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn write_fields<T>(&self, f: impl FnOnce(&mut MagazineFields) -> T) -> T {
        f(&mut self
            .inner
            .fields
            .write()
            .unwrap_or_else(PoisonError::into_inner))
    }

    // Emitted with no lock held so handlers can read the magazine back
    fn revised(&self, field: Field, old_value: String, new_value: String) {
        self.inner
            .registry
            .events()
            .emit(MagazineRevised::new(self.inner.id, field, old_value, new_value));
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Magazine {}

impl std::hash::Hash for Magazine {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl std::fmt::Debug for Magazine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.read_fields(|fields| {
            f.debug_struct("Magazine")
                .field("id", &self.inner.id)
                .field("name", &fields.name)
                .field("category", &fields.category)
                .finish()
        })
    }
}

impl std::fmt::Display for Magazine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.read_fields(|fields| write!(f, "{}", fields.name))
    }
}
