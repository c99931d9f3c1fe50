use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("AABBCC"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("#ééé"), None);
}

#[test]
fn rgba_formats_channels_and_alpha() {
    assert_eq!(rgba("#f44336", 0.5), "rgba(244, 67, 54, 0.5)");
    assert_eq!(rgba("#fff", 2.0), "rgba(255, 255, 255, 1)");
}

#[test]
fn rgba_falls_back_to_black() {
    assert_eq!(rgba("red", 0.25), "rgba(0, 0, 0, 0.25)");
}
