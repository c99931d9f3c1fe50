//! Mobile layout of the tabular view: one card per row, no pagination.

#[cfg(test)]
#[path = "data_list_test.rs"]
mod data_list_test;

use leptos::prelude::*;

use crate::table::Row;
use crate::table::columns::{ColumnModel, cell_text};

/// Card content for one row on narrow screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MobileRow {
    pub avatar: String,
    pub primary: String,
    pub secondary: String,
}

impl MobileRow {
    /// Default card: the first column as title, the remaining non-empty
    /// columns as `Label: value` detail.
    pub fn from_row(model: &ColumnModel, row: &Row) -> Self {
        let primary = model.primary_key().map(|key| cell_text(row, key)).unwrap_or_default();
        let secondary = model
            .columns()
            .iter()
            .skip(1)
            .filter_map(|col| {
                let value = cell_text(row, &col.key);
                (!value.is_empty()).then(|| format!("{}: {value}", col.header()))
            })
            .collect::<Vec<_>>()
            .join(" · ");
        Self { avatar: avatar_initial(&primary), primary, secondary }
    }

    #[must_use]
    pub fn with_primary(self, primary: impl Into<String>) -> Self {
        let primary = primary.into();
        Self { avatar: avatar_initial(&primary), primary, ..self }
    }
}

/// Upper-cased first letter of `text`, or `?` when blank.
pub fn avatar_initial(text: &str) -> String {
    text.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[component]
pub fn DataList(
    #[prop(into)] model: Signal<ColumnModel>,
    #[prop(into)] rows: Signal<Vec<Row>>,
    #[prop(optional)] to_mobile_row: Option<Callback<Row, MobileRow>>,
) -> impl IntoView {
    view! {
        <ul class="data-list">
            {move || {
                let model = model.get();
                rows.get()
                    .into_iter()
                    .map(|row| {
                        let card = match to_mobile_row {
                            Some(map) => map.run(row),
                            None => MobileRow::from_row(&model, &row),
                        };
                        view! {
                            <li class="data-list__item">
                                <span class="data-list__avatar" aria-hidden="true">{card.avatar}</span>
                                <div class="data-list__text">
                                    <span class="data-list__primary">{card.primary}</span>
                                    <span class="data-list__secondary">{card.secondary}</span>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
