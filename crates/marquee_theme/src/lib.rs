//! Marquee Theme System
//!
//! Design tokens and named color themes for the Marquee streaming client.
//!
//! # Overview
//!
//! - **Tokens**: color ramps (`gray.c600`), accent roles (`accent.primary`)
//!   and flat colors (`black`)
//! - **Schema**: the closed set of semantic [`Role`]s widgets read, addressed
//!   by dotted paths such as `mediaCard.barFillColor`
//! - **Themes**: named definitions mapping roles to colors; partial themes
//!   inherit from a parent and are checked for completeness on resolution
//! - **Registry & state**: built-in and file-loaded themes, one of them active
//!   per session
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use marquee_theme::{Role, ThemeState, PINK_THEME};
//!
//! // Initialize at app startup
//! ThemeState::init_default()?;
//!
//! let theme = ThemeState::get();
//! theme.set_active(PINK_THEME)?;
//! let fill = theme.color(Role::MediaCardBarFillColor); // #FF99CC
//! ```
//!
//! # Theme files
//!
//! ```rust,ignore
//! let mut registry = ThemeRegistry::builtin()?;
//! registry.load_file("themes/ocean.toml")?;
//! println!("{}", registry.require("ocean")?.to_css(".theme-ocean"));
//! ```

mod error;
mod export;
pub mod loader;
pub mod presets;
pub mod registry;
pub mod schema;
pub mod state;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use error::ThemeError;
pub use loader::parse_definition;
pub use presets::{preset_definition, ThemePreset};
pub use registry::ThemeRegistry;
pub use schema::Role;
pub use state::{set_redraw_callback, ThemeState};
pub use theme::{create_theme, Theme, ThemeDefinition};
pub use themes::{DEFAULT_THEME, PINK_THEME};
pub use tokens::*;
