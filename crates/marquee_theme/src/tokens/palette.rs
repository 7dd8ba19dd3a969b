//! Palettes: the ramps and accent roles a theme draws its colors from

use super::{Color, Ramp, Shade};
use crate::error::ThemeError;
use indexmap::IndexMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Flat accent role keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AccentRole {
    Primary,
    Secondary,
    Error,
}

impl AccentRole {
    pub fn all() -> &'static [AccentRole] {
        &[AccentRole::Primary, AccentRole::Secondary, AccentRole::Error]
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Error => "error",
        }
    }
}

impl FromStr for AccentRole {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.id() == s)
            .ok_or_else(|| ThemeError::InvalidToken {
                token: format!("accent.{s}"),
                reason: "accent roles are primary, secondary and error".to_string(),
            })
    }
}

/// Accent colors; a palette may leave any of them undefined
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accents {
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub error: Option<Color>,
}

impl Accents {
    pub fn new(primary: Color, secondary: Color, error: Color) -> Self {
        Self {
            primary: Some(primary),
            secondary: Some(secondary),
            error: Some(error),
        }
    }

    pub fn get(&self, role: AccentRole) -> Option<Color> {
        match role {
            AccentRole::Primary => self.primary,
            AccentRole::Secondary => self.secondary,
            AccentRole::Error => self.error,
        }
    }

    pub fn set(&mut self, role: AccentRole, color: Color) {
        match role {
            AccentRole::Primary => self.primary = Some(color),
            AccentRole::Secondary => self.secondary = Some(color),
            AccentRole::Error => self.error = Some(color),
        }
    }

    fn merged(&self, over: &Accents) -> Accents {
        Accents {
            primary: over.primary.or(self.primary),
            secondary: over.secondary.or(self.secondary),
            error: over.error.or(self.error),
        }
    }
}

/// A parsed token reference
///
/// Written as `ramp.level` (`gray.c600`), `accent.role` (`accent.primary`)
/// or a bare flat color name (`black`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenRef {
    Shade { ramp: String, shade: Shade },
    Accent(AccentRole),
    Named(String),
}

impl FromStr for TokenRef {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('.') {
            None if !s.is_empty() => Ok(Self::Named(s.to_string())),
            None => Err(ThemeError::UnknownToken(s.to_string())),
            Some(("accent", role)) => role.parse().map(Self::Accent),
            Some((ramp, level)) if !ramp.is_empty() => Ok(Self::Shade {
                ramp: ramp.to_string(),
                shade: level.parse()?,
            }),
            Some(_) => Err(ThemeError::UnknownToken(s.to_string())),
        }
    }
}

impl Display for TokenRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shade { ramp, shade } => write!(f, "{ramp}.{shade}"),
            Self::Accent(role) => write!(f, "accent.{}", role.id()),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Named ramps, accents and flat colors
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    ramps: IndexMap<String, Ramp>,
    accents: Accents,
    named: IndexMap<String, Color>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ramp(mut self, ramp: Ramp) -> Self {
        self.insert_ramp(ramp);
        self
    }

    pub fn with_accents(mut self, accents: Accents) -> Self {
        self.accents = accents;
        self
    }

    pub fn with_color(mut self, name: impl Into<String>, color: Color) -> Self {
        self.named.insert(name.into(), color);
        self
    }

    pub fn insert_ramp(&mut self, ramp: Ramp) {
        self.ramps.insert(ramp.name().to_string(), ramp);
    }

    pub fn accents_mut(&mut self) -> &mut Accents {
        &mut self.accents
    }

    pub fn insert_color(&mut self, name: impl Into<String>, color: Color) {
        self.named.insert(name.into(), color);
    }

    pub fn ramp(&self, name: &str) -> Option<&Ramp> {
        self.ramps.get(name)
    }

    pub fn ramps(&self) -> impl Iterator<Item = &Ramp> {
        self.ramps.values()
    }

    pub fn accents(&self) -> &Accents {
        &self.accents
    }

    /// Look up a parsed reference; missing ramps or levels yield `None`
    pub fn get(&self, token: &TokenRef) -> Option<Color> {
        match token {
            TokenRef::Shade { ramp, shade } => self.ramps.get(ramp)?.get(*shade),
            TokenRef::Accent(role) => self.accents.get(*role),
            TokenRef::Named(name) => self.named.get(name).copied(),
        }
    }

    /// Look up a textual reference such as `gray.c600`
    pub fn resolve(&self, token: &str) -> Option<Color> {
        token
            .parse::<TokenRef>()
            .ok()
            .and_then(|t| self.get(&t))
    }

    /// Like [`Palette::resolve`] but reports why the reference failed
    pub fn expect(&self, token: &str) -> Result<Color, ThemeError> {
        let parsed: TokenRef = token.parse()?;
        self.get(&parsed)
            .ok_or_else(|| ThemeError::UnknownToken(token.to_string()))
    }

    /// Layer `over` on top of this palette.
    ///
    /// A ramp in `over` replaces the ramp of the same name wholesale; accents
    /// and flat colors are replaced key by key.
    pub fn merged(&self, over: &Palette) -> Palette {
        let mut ramps = self.ramps.clone();
        for (name, ramp) in &over.ramps {
            ramps.insert(name.clone(), ramp.clone());
        }
        let mut named = self.named.clone();
        for (name, color) in &over.named {
            named.insert(name.clone(), *color);
        }
        Palette {
            ramps,
            accents: self.accents.merged(&over.accents),
            named,
        }
    }
}
