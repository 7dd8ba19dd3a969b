//! Built-in themes

pub mod default;
pub mod pink;

pub use default::DEFAULT_THEME;
pub use pink::PINK_THEME;
