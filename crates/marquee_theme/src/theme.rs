//! Theme definitions and resolved themes

use crate::error::ThemeError;
use crate::schema::Role;
use crate::tokens::{ColorValue, Palette};
use rustc_hash::FxHashMap;

/// A named, possibly partial set of role colors
///
/// Definitions are what theme authors write. Roles left unset inherit from
/// the parent theme when the definition is resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeDefinition {
    name: String,
    extends: Option<String>,
    palette: Palette,
    colors: FxHashMap<Role, ColorValue>,
}

/// Stamp a name onto a partial set of role colors.
///
/// ```rust,ignore
/// let sunset = create_theme("sunset", [
///     (Role::MediaCardBarFillColor, Color::from_hex(0xFF7733).into()),
/// ])
/// .extends(DEFAULT_THEME);
/// ```
pub fn create_theme(
    name: impl Into<String>,
    overrides: impl IntoIterator<Item = (Role, ColorValue)>,
) -> ThemeDefinition {
    let mut definition = ThemeDefinition::new(name);
    definition.colors.extend(overrides);
    definition
}

impl ThemeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            palette: Palette::default(),
            colors: FxHashMap::default(),
        }
    }

    /// Inherit unset roles (and tokens) from the named theme
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn set(mut self, role: Role, value: impl Into<ColorValue>) -> Self {
        self.colors.insert(role, value.into());
        self
    }

    pub fn insert(&mut self, role: Role, value: impl Into<ColorValue>) {
        self.colors.insert(role, value.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn get(&self, role: Role) -> Option<&ColorValue> {
        self.colors.get(&role)
    }

    /// Number of roles this definition sets itself
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Merge over `base` and check that every role ends up with a color.
    ///
    /// Fails with [`ThemeError::MissingRoles`] naming every role that is
    /// still undefined. The resolved theme records `base` as its parent; a
    /// base other than the one named by `extends` is rejected.
    pub fn resolve(&self, base: Option<&Theme>) -> Result<Theme, ThemeError> {
        if let (Some(expected), Some(base)) = (self.parent(), base) {
            if expected != base.name() {
                return Err(ThemeError::ParentMismatch {
                    theme: self.name.clone(),
                    expected: expected.to_string(),
                    found: base.name().to_string(),
                });
            }
        }
        let (mut colors, palette) = match base {
            Some(base) => (base.colors.clone(), base.palette.merged(&self.palette)),
            None => (FxHashMap::default(), self.palette.clone()),
        };
        colors.extend(self.colors.iter().map(|(role, value)| (*role, value.clone())));

        let missing: Vec<&'static str> = Role::ALL
            .iter()
            .filter(|role| !colors.contains_key(*role))
            .map(|role| role.path())
            .collect();
        if !missing.is_empty() {
            return Err(ThemeError::MissingRoles {
                theme: self.name.clone(),
                roles: missing,
            });
        }

        Ok(Theme {
            name: self.name.clone(),
            parent: base.map(|base| base.name.clone()),
            palette,
            colors,
        })
    }
}

/// A resolved theme: every role has a color
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    name: String,
    parent: Option<String>,
    palette: Palette,
    colors: FxHashMap<Role, ColorValue>,
}

impl Theme {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Theme this one was resolved against, if any
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Tokens visible to this theme, parent tokens included
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Color for a role
    pub fn color(&self, role: Role) -> &ColorValue {
        // Resolution rejects themes with missing roles.
        &self.colors[&role]
    }

    /// Color for a dotted role path; unknown paths apply no color
    pub fn lookup(&self, path: &str) -> Option<&ColorValue> {
        Role::from_path(path).map(|role| self.color(role))
    }

    /// All roles with their colors, in schema order
    pub fn iter(&self) -> impl Iterator<Item = (Role, &ColorValue)> + '_ {
        Role::ALL.iter().map(move |role| (*role, self.color(*role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Color;

    fn total(name: &str, color: Color) -> ThemeDefinition {
        create_theme(name, Role::ALL.iter().map(|role| (*role, ColorValue::from(color))))
    }

    #[test]
    fn partial_definition_without_base_reports_every_missing_role() {
        let partial = create_theme("half", [(Role::BackgroundMain, ColorValue::from(Color::BLACK))]);
        match partial.resolve(None) {
            Err(ThemeError::MissingRoles { theme, roles }) => {
                assert_eq!(theme, "half");
                assert_eq!(roles.len(), Role::ALL.len() - 1);
                assert!(roles.contains(&"mediaCard.barFillColor"));
                assert!(!roles.contains(&"background.main"));
            }
            other => panic!("expected MissingRoles, got {other:?}"),
        }
    }

    #[test]
    fn overrides_win_over_the_base() {
        let base = total("base", Color::WHITE).resolve(None).unwrap();
        let child = create_theme(
            "child",
            [(Role::MediaCardBadge, ColorValue::var("--brand"))],
        )
        .extends("base")
        .resolve(Some(&base))
        .unwrap();

        assert_eq!(child.color(Role::MediaCardBadge), &ColorValue::var("--brand"));
        assert_eq!(
            child.color(Role::MediaCardShadow),
            &ColorValue::Solid(Color::WHITE)
        );
        assert_eq!(child.parent(), Some("base"));
    }

    #[test]
    fn parent_is_the_theme_resolved_against() {
        let base = total("base", Color::WHITE).resolve(None).unwrap();

        let implicit = ThemeDefinition::new("implicit").resolve(Some(&base)).unwrap();
        assert_eq!(implicit.parent(), Some("base"));
        assert_eq!(base.parent(), None);

        let mismatched = ThemeDefinition::new("stray").extends("other");
        match mismatched.resolve(Some(&base)) {
            Err(ThemeError::ParentMismatch { theme, expected, found }) => {
                assert_eq!(theme, "stray");
                assert_eq!(expected, "other");
                assert_eq!(found, "base");
            }
            other => panic!("expected ParentMismatch, got {other:?}"),
        }
    }

    #[test]
    fn lookup_by_path_is_undefined_for_unknown_roles() {
        let theme = total("flat", Color::BLACK).resolve(None).unwrap();
        assert_eq!(
            theme.lookup("video.context.slider"),
            Some(&ColorValue::Solid(Color::BLACK))
        );
        assert_eq!(theme.lookup("video.context.glow"), None);
        assert_eq!(theme.lookup(""), None);
    }

    #[test]
    fn iter_follows_schema_order() {
        let theme = total("flat", Color::BLACK).resolve(None).unwrap();
        let roles: Vec<Role> = theme.iter().map(|(role, _)| role).collect();
        assert_eq!(roles, Role::ALL);
    }
}
