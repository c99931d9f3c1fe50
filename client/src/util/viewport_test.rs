use super::*;

#[test]
fn wide_viewport_uses_table_layout() {
    assert_eq!(layout_for_width(1280.0), Layout::Table);
    assert_eq!(layout_for_width(DESKTOP_BREAKPOINT_PX), Layout::Table);
}

#[test]
fn narrow_viewport_uses_list_layout() {
    assert_eq!(layout_for_width(375.0), Layout::List);
    assert_eq!(layout_for_width(DESKTOP_BREAKPOINT_PX - 1.0), Layout::List);
}
