use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::theme::{ComponentRef, Theme};
use crate::{slug, Error, Result};

/// Append-only store of themes keyed by `metadata.id`.
///
/// Themes are never replaced or removed: the first registration of an id
/// wins and later ones are ignored. Lookups hand out shared `Arc`s, so the
/// same id always resolves to the same allocation.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    themes: RwLock<IndexMap<String, Arc<Theme>>>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, Arc<Theme>>> {
        // Themes are inserted whole, so a poisoned map is still consistent.
        self.themes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, Arc<Theme>>> {
        self.themes.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `theme` and returns the theme now stored under its id.
    ///
    /// If the id is already taken this logs a warning and returns the
    /// existing theme untouched.
    pub fn register(&self, theme: Theme) -> Arc<Theme> {
        let mut themes = self.write();
        let id = theme.metadata.id.clone();

        if let Some(existing) = themes.get(&id) {
            warn!(theme = %id, "theme already registered, ignoring duplicate");
            return Arc::clone(existing);
        }

        debug!(theme = %id, "registering theme");
        let theme = Arc::new(theme);
        themes.insert(id, Arc::clone(&theme));
        theme
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    pub fn get_theme(&self, id: &str) -> Option<Arc<Theme>> {
        self.read().get(id).cloned()
    }

    /// Like `get_theme`, for callers that have no fallback.
    pub fn require_theme(&self, id: &str) -> Result<Arc<Theme>> {
        self.get_theme(id).ok_or_else(|| Error {
            code: Error::THEME_NOT_FOUND,
            message: "Theme not found".to_string(),
            description: format!("No theme with id `{}` has been registered.", id),
            file: None,
        })
    }

    pub fn get_all_themes(&self) -> Vec<Arc<Theme>> {
        self.read().values().cloned().collect()
    }

    pub fn get_themes_by_category(&self, category: &str) -> Vec<Arc<Theme>> {
        self.read()
            .values()
            .filter(|t| t.metadata.category == category)
            .cloned()
            .collect()
    }

    pub fn get_themes_by_tag(&self, tag: &str) -> Vec<Arc<Theme>> {
        self.read()
            .values()
            .filter(|t| t.metadata.tags.iter().any(|t| t == tag))
            .cloned()
            .collect()
    }

    /// Resolves the component bound to `slot` in theme `id`.
    pub fn load_component(&self, id: &str, slot: &str) -> Result<ComponentRef> {
        let theme = self.require_theme(id)?;

        match theme.components.get(slot) {
            Some(Some(component)) => Ok(component.clone()),
            _ => Err(Error {
                code: Error::COMPONENT_NOT_FOUND,
                message: "Component not found".to_string(),
                description: format!("Theme `{}` has no `{}` component.", id, slot),
                file: None,
            }),
        }
    }

    /// Registers `theme` under a fresh id derived from its name, ignoring
    /// whatever `metadata.id` it came with.
    pub fn register_unique(&self, mut theme: Theme) -> Arc<Theme> {
        let mut themes = self.write();
        let id = unused_id(&themes, &theme.metadata.name);

        debug!(theme = %id, "registering theme");
        theme.metadata.id = id.clone();
        let theme = Arc::new(theme);
        themes.insert(id, Arc::clone(&theme));
        theme
    }

    /// An unused id derived from `name`: its slug, then `-2`, `-3` and so on.
    pub fn unique_id(&self, name: &str) -> String {
        unused_id(&self.read(), name)
    }
}

fn unused_id(themes: &IndexMap<String, Arc<Theme>>, name: &str) -> String {
    let mut base = slug::slugify(name);
    if base.is_empty() {
        base = "theme".to_string();
    }

    if !themes.contains_key(&base) {
        return base;
    }

    (2..)
        .map(|n| format!("{}-{}", base, n))
        .find(|id| !themes.contains_key(id))
        .unwrap_or(base)
}
