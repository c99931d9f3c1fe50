//! Status and surface colors shared by every page.
//!
//! Values come from the Material color scale (e.g. green 800) so they stay in
//! step with the rest of the application's styling. They are exposed to the
//! stylesheet as CSS custom properties via [`css_variables`].

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::util::color::rgba;

pub const WHITE: &str = "#FFFFFF";
pub const BLACK: &str = "#000000";

/// Green 800.
pub const SUCCESS: &str = "#2e7d32";
/// Amber 800.
pub const WARNING: &str = "#ff8f00";
/// Red 500.
pub const ERROR: &str = "#f44336";
/// Blue-grey 600.
pub const ICON: &str = "#546e7a";

pub const THEME_BACKGROUND: &str = WHITE;

/// A tonal range for one intent, in the shape Material themes expect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteColor {
    pub contrast_text: &'static str,
    pub dark: &'static str,
    pub main: &'static str,
    pub light: &'static str,
}

/// Orange 900 / 600 / 400 with white text.
pub const WARNING_PALETTE: PaletteColor =
    PaletteColor { contrast_text: WHITE, dark: "#e65100", main: "#fb8c00", light: "#ffa726" };

/// `(name, value)` pairs published as `--color-<name>`.
pub fn css_variable_pairs() -> Vec<(&'static str, String)> {
    vec![
        ("white", WHITE.to_owned()),
        ("black", BLACK.to_owned()),
        ("background", THEME_BACKGROUND.to_owned()),
        ("success", SUCCESS.to_owned()),
        ("warning", WARNING.to_owned()),
        ("error", ERROR.to_owned()),
        ("error-tint", rgba(ERROR, 0.12)),
        ("icon", ICON.to_owned()),
        ("warning-contrast", WARNING_PALETTE.contrast_text.to_owned()),
        ("warning-dark", WARNING_PALETTE.dark.to_owned()),
        ("warning-main", WARNING_PALETTE.main.to_owned()),
        ("warning-light", WARNING_PALETTE.light.to_owned()),
    ]
}

/// `:root { ... }` block declaring every palette color.
pub fn css_variables() -> String {
    let body = css_variable_pairs()
        .into_iter()
        .map(|(name, value)| format!("--color-{name}:{value};"))
        .collect::<String>();
    format!(":root{{{body}}}")
}
