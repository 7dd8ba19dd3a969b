//! Pink theme
//!
//! A partial theme over [`DEFAULT_THEME`](super::DEFAULT_THEME): roles it does
//! not set (danger buttons, onboarding, scraping errors, ...) keep the
//! default colors.

use super::DEFAULT_THEME;
use crate::schema::Role::*;
use crate::theme::{create_theme, ThemeDefinition};
use crate::tokens::{ColorValue, Palette};

pub const PINK_THEME: &str = "pink";

crate::ramp! {
    pub mod pink = "pink" {
        C50 = 0xFFCCE5,
        C100 = 0xFF99CC,
        C200 = 0xFF66B2,
        C300 = 0xFF3399,
        C400 = 0xFF0080,
        C500 = 0xCC0066,
        C600 = 0x99004D,
        C700 = 0x660033,
        C800 = 0x33001A,
        C900 = 0x19000D,
    }
}

crate::ramp! {
    /// Lighter shades than the default theme's
    pub mod shade = "shade" {
        C25 = 0x9C9C9C,
        C50 = 0x7C7C7C,
        C100 = 0x666666,
        C200 = 0x4F4F4F,
        C300 = 0x404040,
        C400 = 0x343434,
        C500 = 0x282828,
        C600 = 0x202020,
        C700 = 0x1A1A1A,
        C800 = 0x151515,
        C900 = 0x0E0E0E,
    }
}

crate::ramp! {
    pub mod ash = "ash" {
        C50 = 0x8D8D8D,
        C100 = 0x6B6B6B,
        C200 = 0x545454,
        C300 = 0x3C3C3C,
        C400 = 0x313131,
        C500 = 0x2C2C2C,
        C600 = 0x252525,
        C700 = 0x1E1E1E,
        C800 = 0x181818,
        C900 = 0x111111,
    }
}

pub fn palette() -> Palette {
    Palette::new()
        .with_ramp(pink::ramp())
        .with_ramp(shade::ramp())
        .with_ramp(ash::ramp())
}

pub fn definition() -> ThemeDefinition {
    create_theme(
        PINK_THEME,
        [(MediaCardBarFillColor, ColorValue::from(pink::C100))],
    )
    .extends(DEFAULT_THEME)
    .with_palette(palette())
    .set(ThemePreviewPrimary, pink::C200)
    .set(ThemePreviewSecondary, shade::C50)
    .set(PillBackground, shade::C300)
    .set(PillBackgroundHover, shade::C200)
    .set(PillHighlight, pink::C200)
    .set(PillActiveBackground, shade::C300)
    .set(GlobalAccentA, pink::C200)
    .set(GlobalAccentB, pink::C300)
    .set(LightBarLight, pink::C400)
    .set(ButtonsToggle, pink::C300)
    .set(ButtonsToggleDisabled, ash::C500)
    .set(ButtonsSecondary, ash::C700)
    .set(ButtonsSecondaryHover, ash::C700)
    .set(ButtonsPurple, pink::C500)
    .set(ButtonsPurpleHover, pink::C400)
    .set(ButtonsCancel, ash::C500)
    .set(ButtonsCancelHover, ash::C300)
    .set(BackgroundMain, shade::C900)
    .set(BackgroundSecondary, shade::C600)
    .set(BackgroundSecondaryHover, shade::C400)
    .set(BackgroundAccentA, pink::C500)
    .set(BackgroundAccentB, pink::C500)
    .set(ModalBackground, shade::C800)
    .set(TypeLogo, pink::C100)
    .set(TypeText, shade::C50)
    .set(TypeDimmed, shade::C50)
    .set(TypeDivider, ash::C500)
    .set(TypeSecondary, ash::C100)
    .set(TypeLink, pink::C100)
    .set(TypeLinkHover, pink::C50)
    .set(SearchBackground, shade::C500)
    .set(SearchHoverBackground, shade::C600)
    .set(SearchFocused, shade::C400)
    .set(SearchPlaceholder, shade::C100)
    .set(SearchIcon, shade::C100)
    .set(MediaCardHoverBackground, shade::C600)
    .set(MediaCardHoverAccent, shade::C25)
    .set(MediaCardHoverShadow, shade::C900)
    .set(MediaCardShadow, shade::C700)
    .set(MediaCardBarColor, ash::C200)
    .set(MediaCardBadge, shade::C700)
    .set(MediaCardBadgeText, ash::C100)
    .set(LargeCardBackground, shade::C600)
    .set(LargeCardIcon, pink::C400)
    .set(DropdownBackground, shade::C600)
    .set(DropdownAltBackground, shade::C700)
    .set(DropdownHoverBackground, shade::C500)
    .set(DropdownText, shade::C50)
    .set(DropdownSecondary, shade::C100)
    .set(DropdownBorder, shade::C400)
    .set(DropdownContentBackground, shade::C500)
    .set(AuthenticationBorder, shade::C300)
    .set(AuthenticationInputBg, shade::C600)
    .set(AuthenticationInputBgHover, shade::C500)
    .set(AuthenticationWordBackground, shade::C500)
    .set(AuthenticationCopyText, shade::C100)
    .set(AuthenticationCopyTextHover, ash::C50)
    .set(SettingsSidebarActiveLink, shade::C600)
    .set(SettingsSidebarBadge, shade::C900)
    .set(SettingsSidebarTypeSecondary, shade::C200)
    .set(SettingsSidebarTypeInactive, shade::C50)
    .set(SettingsSidebarTypeIcon, shade::C50)
    .set(SettingsSidebarTypeIconActivated, pink::C200)
    .set(SettingsSidebarTypeActivated, pink::C50)
    .set(SettingsCardBorder, shade::C400)
    .set(SettingsCardBackground, shade::C400)
    .set(SettingsCardAltBackground, shade::C400)
    .set(SettingsSaveBarBackground, shade::C800)
    .set(UtilsDivider, ash::C300)
    .set(ErrorsCard, shade::C800)
    .set(ErrorsBorder, ash::C500)
    .set(ErrorsTypeSecondary, ash::C100)
    .set(AboutCircle, ash::C500)
    .set(AboutCircleText, ash::C50)
    .set(EditBadgeBg, ash::C500)
    .set(EditBadgeBgHover, ash::C400)
    .set(EditBadgeText, ash::C50)
    .set(ProgressBackground, ash::C50)
    .set(ProgressPreloaded, ash::C50)
    .set(ProgressFilled, pink::C200)
    .set(VideoButtonBackground, ash::C200)
    .set(VideoAutoPlayBackground, ash::C700)
    .set(VideoAutoPlayHover, ash::C500)
    .set(VideoScrapingCard, shade::C700)
    .set(VideoScrapingLoading, pink::C200)
    .set(VideoScrapingNoresult, ash::C100)
    .set(VideoAudioSet, pink::C200)
    .set(VideoContextBackground, ash::C900)
    .set(VideoContextLight, shade::C50)
    .set(VideoContextBorder, ash::C600)
    .set(VideoContextHoverColor, ash::C600)
    .set(VideoContextButtonFocus, ash::C500)
    .set(VideoContextFlagBg, ash::C500)
    .set(VideoContextInputBg, ash::C600)
    .set(VideoContextButtonOverInputHover, ash::C500)
    .set(VideoContextInputPlaceholder, ash::C200)
    .set(VideoContextCardBorder, ash::C700)
    .set(VideoContextSlider, ash::C50)
    .set(VideoContextSliderFilled, pink::C200)
    .set(VideoContextButtonsList, ash::C700)
    .set(VideoContextButtonsActive, ash::C900)
    .set(VideoContextCloseHover, ash::C800)
    .set(VideoContextTypeSecondary, ash::C200)
    .set(VideoContextTypeAccent, pink::C200)
}
