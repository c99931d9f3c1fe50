//! Generic data view over server-supplied columns and rows.
//!
//! ARCHITECTURE
//! ============
//! Sorting and pagination state live here; `table::prepare::prepare_rows`
//! turns it into the rows to show, and the viewport picks the adapter:
//! `DataTable` on wide screens, `DataList` on narrow ones. A loading flag
//! replaces either adapter with the placeholder, and zero rows replace it
//! with an explicit notice.

use leptos::prelude::*;

use crate::components::data_list::{DataList, MobileRow};
use crate::components::data_table::DataTable;
use crate::components::loading::Loading;
use crate::config::DEFAULT_ROWS_PER_PAGE;
use crate::table::columns::{ColumnDescriptor, ColumnModel};
use crate::table::paging::{Pagination, page_size_options};
use crate::table::prepare::{ViewBody, body_for, prepare_rows};
use crate::table::sort::{SortState, initial_sort, toggle_sort};
use crate::table::{EMPTY_TABLE_NOTICE, Row};
use crate::util::viewport::use_layout;

#[component]
pub fn TabularView(
    #[prop(into)] columns: Signal<Vec<ColumnDescriptor>>,
    #[prop(into)] rows: Signal<Vec<Row>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into, optional)] initial_sort_by: Option<String>,
    #[prop(default = DEFAULT_ROWS_PER_PAGE)] initial_rows_per_page: usize,
    #[prop(optional)] to_mobile_row: Option<Callback<Row, MobileRow>>,
) -> impl IntoView {
    let layout = use_layout();
    let model = Memo::new(move |_| ColumnModel::new(columns.get()));

    // `None` until the user clicks a header; then the chosen sort (which may
    // itself be `None` if the initial key was unusable and nothing sortable
    // was clicked yet).
    let chosen_sort = RwSignal::new(None::<Option<SortState>>);
    let initial_sort_by = StoredValue::new(initial_sort_by);
    let sort = Memo::new(move |_| match chosen_sort.get() {
        Some(chosen) => chosen,
        None => model.with(|m| initial_sort_by.with_value(|key| initial_sort(m, key.as_deref()))),
    });
    let on_sort = Callback::new(move |key: String| {
        let next = model.with_untracked(|m| toggle_sort(sort.get_untracked().as_ref(), m, &key));
        chosen_sort.set(Some(next));
    });

    let paging = RwSignal::new(Pagination::new(initial_rows_per_page));
    let page_sizes = page_size_options(initial_rows_per_page);

    let prepared = Memo::new(move |_| {
        rows.with(|rows| prepare_rows(rows, sort.get().as_ref(), paging.get(), layout.get()))
    });

    let body = Memo::new(move |_| prepared.with(|p| body_for(loading.get(), p, layout.get())));

    view! {
        <div class="tabular-view">
            {move || match body.get() {
                ViewBody::Loading => view! { <Loading/> }.into_any(),
                ViewBody::Empty => {
                    view! { <p class="tabular-view__empty" role="status">{EMPTY_TABLE_NOTICE}</p> }.into_any()
                }
                ViewBody::Table { pagination } => {
                    view! {
                        <DataTable
                            model=model
                            prepared=prepared
                            sort=sort
                            paging=paging
                            on_sort=on_sort
                            page_sizes=page_sizes.clone()
                            show_pagination=pagination
                        />
                    }
                        .into_any()
                }
                ViewBody::List => {
                    let list_rows = Signal::derive(move || prepared.get().rows);
                    match to_mobile_row {
                        Some(map) => view! { <DataList model=model rows=list_rows to_mobile_row=map/> }.into_any(),
                        None => view! { <DataList model=model rows=list_rows/> }.into_any(),
                    }
                }
            }}
        </div>
    }
}
