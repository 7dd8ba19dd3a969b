//! Built-in theme preset catalog.

use crate::theme::ThemeDefinition;
use crate::themes::{default, pink};
use std::fmt::{Display, Formatter};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Grayscale base theme; every other preset extends it.
    Default,
    /// Pink accents over lighter shades.
    Pink,
}

impl ThemePreset {
    /// Stable preset id, also the registry name.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => default::DEFAULT_THEME,
            Self::Pink => pink::PINK_THEME,
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Pink => "Pink",
        }
    }

    /// Full preset list, parents before the themes that extend them.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Default, ThemePreset::Pink];
        &PRESETS
    }

    pub fn from_id(id: &str) -> Option<ThemePreset> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// Build the (possibly partial) definition for this preset.
    pub fn definition(self) -> ThemeDefinition {
        match self {
            Self::Default => default::definition(),
            Self::Pink => pink::definition(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_definition(preset: ThemePreset) -> ThemeDefinition {
    preset.definition()
}
