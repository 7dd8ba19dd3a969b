//! Color ramps: ordered shades of one hue

use super::Color;
use crate::error::ThemeError;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Shade level within a ramp, lightest first
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Shade {
    C25,
    C50,
    C100,
    C200,
    C300,
    C400,
    C500,
    C600,
    C700,
    C800,
    C900,
}

impl Shade {
    pub fn all() -> &'static [Shade] {
        const SHADES: [Shade; 11] = [
            Shade::C25,
            Shade::C50,
            Shade::C100,
            Shade::C200,
            Shade::C300,
            Shade::C400,
            Shade::C500,
            Shade::C600,
            Shade::C700,
            Shade::C800,
            Shade::C900,
        ];
        &SHADES
    }

    /// Numeric level (`C600` -> 600)
    pub fn level(self) -> u16 {
        match self {
            Self::C25 => 25,
            Self::C50 => 50,
            Self::C100 => 100,
            Self::C200 => 200,
            Self::C300 => 300,
            Self::C400 => 400,
            Self::C500 => 500,
            Self::C600 => 600,
            Self::C700 => 700,
            Self::C800 => 800,
            Self::C900 => 900,
        }
    }

    pub fn from_level(level: u16) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.level() == level)
    }
}

impl Display for Shade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.level())
    }
}

impl FromStr for Shade {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('c')
            .and_then(|digits| digits.parse::<u16>().ok())
            .and_then(Self::from_level)
            .ok_or_else(|| ThemeError::InvalidToken {
                token: s.to_string(),
                reason: "shade levels are c25, c50 and c100..c900".to_string(),
            })
    }
}

/// A named family of shades
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ramp {
    name: String,
    shades: BTreeMap<Shade, Color>,
}

impl Ramp {
    pub fn new(name: impl Into<String>, shades: impl IntoIterator<Item = (Shade, Color)>) -> Self {
        Self {
            name: name.into(),
            shades: shades.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, shade: Shade) -> Option<Color> {
        self.shades.get(&shade).copied()
    }

    /// Defined shades in ascending level order
    pub fn levels(&self) -> impl Iterator<Item = (Shade, Color)> + '_ {
        self.shades.iter().map(|(shade, color)| (*shade, *color))
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

/// Declare a ramp as a module of `Color` constants plus a `ramp()` constructor.
///
/// ```rust,ignore
/// ramp! {
///     pub mod gray = "gray" {
///         C100 = 0xE0E0E0,
///         C900 = 0x000000,
///     }
/// }
///
/// assert_eq!(gray::ramp().get(Shade::C100), Some(gray::C100));
/// ```
#[macro_export]
macro_rules! ramp {
    (
        $(#[$meta:meta])*
        $vis:vis mod $module:ident = $name:literal {
            $($shade:ident = $hex:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis mod $module {
            use $crate::tokens::{Color, Ramp, Shade};

            $(pub const $shade: Color = Color::from_hex($hex);)*

            /// Runtime view of this ramp for token-reference lookups
            pub fn ramp() -> Ramp {
                Ramp::new($name, [$((Shade::$shade, $shade)),*])
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::ramp! {
        mod mint = "mint" {
            C900 = 0x003322,
            C100 = 0xCCFFEE,
            C500 = 0x33AA88,
        }
    }

    #[test]
    fn shade_names_round_trip_through_text() {
        for shade in Shade::all() {
            assert_eq!(shade.to_string().parse::<Shade>().unwrap(), *shade);
        }
        assert!("c150".parse::<Shade>().is_err());
        assert!("600".parse::<Shade>().is_err());
    }

    #[test]
    fn ramp_levels_are_ordered_lightest_first() {
        let ramp = mint::ramp();
        let levels: Vec<Shade> = ramp.levels().map(|(s, _)| s).collect();
        assert_eq!(levels, vec![Shade::C100, Shade::C500, Shade::C900]);
        assert_eq!(ramp.get(Shade::C500), Some(mint::C500));
        assert_eq!(ramp.get(Shade::C25), None);
        assert_eq!(ramp.name(), "mint");
    }
}
