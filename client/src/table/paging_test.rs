use super::*;

#[test]
fn page_count_is_at_least_one() {
    let p = Pagination::new(10);
    assert_eq!(p.page_count(0), 1);
    assert_eq!(p.page_count(1), 1);
    assert_eq!(p.page_count(10), 1);
    assert_eq!(p.page_count(11), 2);
    assert_eq!(p.page_count(42), 5);
}

#[test]
fn zero_page_size_is_treated_as_one() {
    let p = Pagination::new(0);
    assert_eq!(p.page_size(), 1);
    assert_eq!(p.page_count(3), 3);
}

#[test]
fn page_index_is_clamped_to_last_page() {
    let p = Pagination::new(10).go_to(99, 25);
    assert_eq!(p.page(25), 2);
    assert_eq!(p.range(25), 20..25);
}

#[test]
fn page_index_is_zero_without_rows() {
    let p = Pagination::new(10).go_to(3, 0);
    assert_eq!(p.page(0), 0);
    assert_eq!(p.range(0), 0..0);
    assert!(!p.has_prev(0));
    assert!(!p.has_next(0));
}

#[test]
fn stale_page_index_clamps_when_rows_shrink() {
    let p = Pagination::new(5).go_to(3, 20);
    assert_eq!(p.page(20), 3);
    assert_eq!(p.page(7), 1);
    assert_eq!(p.range(7), 5..7);
}

#[test]
fn next_and_prev_stop_at_bounds() {
    let total = 15;
    let p = Pagination::new(10);
    assert!(p.has_next(total));
    let p = p.next(total);
    assert_eq!(p.page(total), 1);
    assert!(!p.has_next(total));
    assert_eq!(p.next(total).page(total), 1);
    let p = p.prev(total).prev(total);
    assert_eq!(p.page(total), 0);
}

#[test]
fn changing_page_size_resets_to_first_page() {
    let p = Pagination::new(5).go_to(2, 30).with_page_size(25);
    assert_eq!(p.page(30), 0);
    assert_eq!(p.page_size(), 25);
}

#[test]
fn slice_returns_visible_page() {
    let items: Vec<u32> = (1..=12).collect();
    let p = Pagination::new(5).go_to(2, items.len());
    assert_eq!(p.slice(&items), &[11, 12]);
}

#[test]
fn label_describes_visible_range() {
    let p = Pagination::new(10).go_to(1, 42);
    assert_eq!(p.label(42), "11-20 of 42");
    assert_eq!(Pagination::new(10).label(0), "0-0 of 0");
}

#[test]
fn page_size_options_include_custom_initial() {
    assert_eq!(page_size_options(10), vec![5, 10, 25, 50]);
    assert_eq!(page_size_options(15), vec![5, 10, 15, 25, 50]);
}
