//! Named collection of resolved themes

use crate::error::ThemeError;
use crate::presets::ThemePreset;
use crate::theme::{Theme, ThemeDefinition};
use indexmap::IndexMap;
use tracing::debug;

/// Resolved themes keyed by unique name, in registration order
#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Theme>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in preset
    pub fn builtin() -> Result<Self, ThemeError> {
        let mut registry = Self::new();
        for preset in ThemePreset::all() {
            registry.register_definition(preset.definition())?;
        }
        Ok(registry)
    }

    /// Add a resolved theme; names must be unique
    pub fn register(&mut self, theme: Theme) -> Result<&Theme, ThemeError> {
        if self.themes.contains_key(theme.name()) {
            return Err(ThemeError::DuplicateTheme(theme.name().to_string()));
        }
        debug!(
            "ThemeRegistry::register - `{}` (parent: {:?})",
            theme.name(),
            theme.parent()
        );
        let entry = self.themes.entry(theme.name().to_string());
        Ok(entry.or_insert(theme))
    }

    /// Resolve a definition against its registered parent, then register it
    pub fn register_definition(
        &mut self,
        definition: ThemeDefinition,
    ) -> Result<&Theme, ThemeError> {
        if self.themes.contains_key(definition.name()) {
            return Err(ThemeError::DuplicateTheme(definition.name().to_string()));
        }
        let base = match definition.parent() {
            Some(parent) => Some(
                self.themes
                    .get(parent)
                    .ok_or_else(|| ThemeError::UnknownTheme(parent.to_string()))?,
            ),
            None => None,
        };
        let theme = definition.resolve(base)?;
        self.register(theme)
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Like [`ThemeRegistry::get`] but reports the unknown name
    pub fn require(&self, name: &str) -> Result<&Theme, ThemeError> {
        self.get(name)
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.themes.get_index_of(name)
    }

    pub(crate) fn by_index(&self, index: usize) -> &Theme {
        &self.themes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Role;
    use crate::theme::create_theme;
    use crate::themes::{DEFAULT_THEME, PINK_THEME};
    use crate::tokens::{Color, ColorValue};

    #[test]
    fn builtin_registry_keeps_preset_order() {
        let registry = ThemeRegistry::builtin().unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec![DEFAULT_THEME, PINK_THEME]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = ThemeRegistry::builtin().unwrap();
        let again = ThemePreset::Pink.definition();
        assert!(matches!(
            registry.register_definition(again),
            Err(ThemeError::DuplicateTheme(name)) if name == PINK_THEME
        ));

        let default = registry.require(DEFAULT_THEME).unwrap().clone();
        assert!(matches!(
            registry.register(default),
            Err(ThemeError::DuplicateTheme(_))
        ));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn unknown_parent_is_reported() {
        let mut registry = ThemeRegistry::new();
        let orphan = create_theme(
            "orphan",
            [(Role::BackgroundMain, ColorValue::from(Color::BLACK))],
        )
        .extends("nowhere");
        assert!(matches!(
            registry.register_definition(orphan),
            Err(ThemeError::UnknownTheme(name)) if name == "nowhere"
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn partial_theme_without_parent_is_not_registered() {
        let mut registry = ThemeRegistry::new();
        let partial = create_theme(
            "bare",
            [(Role::BackgroundMain, ColorValue::from(Color::BLACK))],
        );
        assert!(matches!(
            registry.register_definition(partial),
            Err(ThemeError::MissingRoles { .. })
        ));
        assert!(!registry.contains("bare"));
    }
}
