use super::*;
use crate::util::color::parse_hex_rgb;

#[test]
fn every_palette_value_is_a_hex_color() {
    for hex in [WHITE, BLACK, SUCCESS, WARNING, ERROR, ICON, THEME_BACKGROUND] {
        assert!(parse_hex_rgb(hex).is_some(), "{hex}");
    }
    for hex in [WARNING_PALETTE.contrast_text, WARNING_PALETTE.dark, WARNING_PALETTE.main, WARNING_PALETTE.light] {
        assert!(parse_hex_rgb(hex).is_some(), "{hex}");
    }
}

#[test]
fn material_scale_values() {
    assert_eq!(SUCCESS, "#2e7d32");
    assert_eq!(WARNING, "#ff8f00");
    assert_eq!(ERROR, "#f44336");
    assert_eq!(ICON, "#546e7a");
    assert_eq!(WARNING_PALETTE.main, "#fb8c00");
}

#[test]
fn background_is_white() {
    assert_eq!(THEME_BACKGROUND, WHITE);
}

#[test]
fn css_variables_declares_root_block() {
    let css = css_variables();
    assert!(css.starts_with(":root{"));
    assert!(css.ends_with('}'));
    assert!(css.contains("--color-success:#2e7d32;"));
    assert!(css.contains("--color-error-tint:rgba(244, 67, 54, 0.12);"));
    assert!(css.contains("--color-warning-light:#ffa726;"));
}
