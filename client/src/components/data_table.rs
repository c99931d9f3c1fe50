//! Desktop layout of the tabular view: sortable headers, one page of rows,
//! and a pagination footer.

use leptos::prelude::*;

use crate::table::columns::{ColumnModel, cell_text};
use crate::table::paging::Pagination;
use crate::table::prepare::PreparedRows;
use crate::table::sort::{SortDirection, SortState};

fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "▲",
        Some(SortDirection::Descending) => "▼",
        None => "",
    }
}

#[component]
pub fn DataTable(
    #[prop(into)] model: Signal<ColumnModel>,
    #[prop(into)] prepared: Signal<PreparedRows>,
    #[prop(into)] sort: Signal<Option<SortState>>,
    paging: RwSignal<Pagination>,
    on_sort: Callback<String>,
    page_sizes: Vec<usize>,
    show_pagination: bool,
) -> impl IntoView {
    let total = move || prepared.with(|p| p.total);

    let header = move || {
        let active = sort.get();
        model
            .get()
            .columns()
            .iter()
            .map(|col| {
                let direction = active.as_ref().filter(|s| s.key == col.key).map(|s| s.direction);
                let label = col.header().to_owned();
                if !col.sortable {
                    return view! { <th class="data-table__th">{label}</th> }.into_any();
                }
                let key = col.key.clone();
                view! {
                    <th
                        class="data-table__th data-table__th--sortable"
                        class:data-table__th--active=direction.is_some()
                        aria-sort=direction.map_or("none", SortDirection::aria)
                    >
                        <button class="data-table__sort" on:click=move |_| on_sort.run(key.clone())>
                            {label}
                            <span class="data-table__sort-icon" aria-hidden="true">{sort_indicator(direction)}</span>
                        </button>
                    </th>
                }
                    .into_any()
            })
            .collect_view()
    };

    let body = move || {
        let model = model.get();
        prepared
            .get()
            .rows
            .into_iter()
            .map(|row| {
                let cells = model
                    .columns()
                    .iter()
                    .map(|col| view! { <td class="data-table__td">{cell_text(&row, &col.key)}</td> })
                    .collect_view();
                view! { <tr class="data-table__row">{cells}</tr> }
            })
            .collect_view()
    };

    let footer = show_pagination.then(move || {
        view! {
            <div class="data-table__pagination">
                <label class="data-table__page-size">
                    "Rows per page: "
                    <select on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            paging.update(|p| *p = p.with_page_size(size));
                        }
                    }>
                        {page_sizes
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <option value=size.to_string() selected=move || paging.get().page_size() == size>
                                        {size.to_string()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <span class="data-table__range">{move || paging.get().label(total())}</span>
                <button
                    class="btn data-table__page-btn"
                    disabled=move || !paging.get().has_prev(total())
                    on:click=move |_| paging.update(|p| *p = p.prev(total()))
                    title="Previous page"
                    aria-label="Previous page"
                >
                    "‹"
                </button>
                <button
                    class="btn data-table__page-btn"
                    disabled=move || !paging.get().has_next(total())
                    on:click=move |_| paging.update(|p| *p = p.next(total()))
                    title="Next page"
                    aria-label="Next page"
                >
                    "›"
                </button>
            </div>
        }
    });

    view! {
        <div class="data-table">
            <div class="data-table__scroll">
                <table class="data-table__table">
                    <thead>
                        <tr>{header}</tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
            {footer}
        </div>
    }
}
