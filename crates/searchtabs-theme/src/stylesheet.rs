//! Style sheets and icons for the window chrome
//!
//! The chrome renders these as-is; only the colors vary with the theme.

use crate::palette::{Color, ColorPalette};
use crate::preference::EffectiveTheme;

/// Icon shown when a name has no themed variant.
pub(crate) const FALLBACK_ICON: &str = "icons/final/setting.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    AddTab,
    Settings,
}

impl Icon {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Icon::Home),
            "add" => Some(Icon::AddTab),
            "settings" => Some(Icon::Settings),
            _ => None,
        }
    }

    /// Dark glyphs on the light theme, light glyphs on the dark theme.
    pub fn path(&self, theme: EffectiveTheme) -> &'static str {
        match (theme, self) {
            (EffectiveTheme::Light, Icon::Home) => "icons/final/home_dark.png",
            (EffectiveTheme::Light, Icon::AddTab) => "icons/final/add_tab_dark.png",
            (EffectiveTheme::Light, Icon::Settings) => "icons/final/tune_dark.png",
            (EffectiveTheme::Dark, Icon::Home) => "icons/final/home.png",
            (EffectiveTheme::Dark, Icon::AddTab) => "icons/final/add_tab.png",
            (EffectiveTheme::Dark, Icon::Settings) => "icons/final/tune.png",
        }
    }
}

/// Extra colors used by dialogs, on top of the palette.
struct DialogColors {
    surface: Color,
    control: Color,
    control_border: Color,
    group_border: Color,
    button: Color,
    button_hover: Color,
}

fn dialog_colors(theme: EffectiveTheme) -> DialogColors {
    match theme {
        EffectiveTheme::Light => DialogColors {
            surface: Color::rgb(0xF3, 0xF3, 0xEE),
            control: Color::rgb(0xFF, 0xFF, 0xFF),
            control_border: Color::rgb(0x99, 0x99, 0x99),
            group_border: Color::rgb(0xCC, 0xCC, 0xCC),
            button: Color::rgb(0xE8, 0xE8, 0xE5),
            button_hover: Color::rgb(0xD0, 0xD0, 0xD0),
        },
        EffectiveTheme::Dark => DialogColors {
            surface: Color::rgb(0x20, 0x22, 0x22),
            control: Color::rgb(0x33, 0x33, 0x33),
            control_border: Color::rgb(0x66, 0x66, 0x66),
            group_border: Color::rgb(0x44, 0x44, 0x44),
            button: Color::rgb(0x2D, 0x2E, 0x2E),
            button_hover: Color::rgb(0x3D, 0x3E, 0x3E),
        },
    }
}

/// Tab bar and toolbar buttons of the main window.
pub(crate) fn main_window(palette: &ColorPalette) -> String {
    format!(
        r#".tab-bar {{ border: 0; }}
.tab-bar .tab {{ background: {tab_bg}; color: {text}; padding: 5px; }}
.tab-bar .tab.selected {{ background: {tab_selected}; }}
.toolbar button {{ background-color: {bg}; color: {text}; border: none; padding: 5px; border-radius: 3px; }}
.toolbar button:hover {{ background-color: {hover}; }}
.progress-bar {{ background-color: transparent; height: 2px; }}
.progress-bar .chunk {{ background-color: {accent}; }}
"#,
        tab_bg = palette.tab_background,
        tab_selected = palette.tab_selected,
        bg = palette.background,
        text = palette.text,
        hover = palette.hover,
        accent = palette.accent,
    )
}

pub(crate) fn settings_dialog(theme: EffectiveTheme, palette: &ColorPalette) -> String {
    let dialog = dialog_colors(theme);
    format!(
        r#".dialog {{ background-color: {surface}; }}
.dialog .group {{ font-weight: bold; border: 1px solid {group_border}; border-radius: 5px; color: {text}; }}
.dialog label {{ color: {text}; }}
.dialog input[type=checkbox], .dialog input[type=radio] {{ background-color: {control}; border: 1px solid {control_border}; }}
.dialog input:checked {{ background-color: {accent}; border: 1px solid {accent}; }}
.dialog select {{ background-color: {control}; color: {text}; border: 1px solid {group_border}; border-radius: 3px; padding: 5px; }}
.dialog select option:checked {{ background-color: {hover}; }}
.dialog button {{ background-color: {hover}; color: {text}; border: none; padding: 8px; border-radius: 4px; }}
.dialog button:hover {{ background-color: {accent}; }}
"#,
        surface = dialog.surface,
        group_border = dialog.group_border,
        control = dialog.control,
        control_border = dialog.control_border,
        text = palette.text,
        hover = palette.hover,
        accent = palette.accent,
    )
}

pub(crate) fn message_box(theme: EffectiveTheme, palette: &ColorPalette) -> String {
    let dialog = dialog_colors(theme);
    format!(
        r#".message-box {{ background-color: {surface}; color: {text}; border: 1px solid {border}; border-radius: 5px; }}
.message-box label {{ color: {text}; font-size: 12px; }}
.message-box button {{ background-color: {button}; color: {text}; border: none; border-radius: 4px; min-width: 80px; min-height: 24px; padding: 4px 16px; font-weight: bold; }}
.message-box button:hover {{ background-color: {button_hover}; }}
.message-box button:focus {{ border: 1px solid {accent}; }}
.message-box button.default {{ background-color: {accent}; color: white; }}
"#,
        surface = dialog.surface,
        border = dialog.group_border,
        button = dialog.button,
        button_hover = dialog.button_hover,
        text = palette.text,
        accent = palette.accent,
    )
}
