//! Scanner table component.
//!
//! Renders the filtered, sorted snapshot rows. Column headers are
//! clickable: clicking the active column flips the direction, clicking a
//! new column selects it with its natural direction.

mod row;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::view::{self, SortDirection, SortKey};
use row::ScannerRowView;

#[component]
pub fn ScannerTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let has_snapshot = Signal::derive(move || ctx.scanner.with(|s| s.is_some()));
    let rows = Memo::new(move |_| {
        ctx.scanner.with(|s| {
            let Some(snapshot) = s.as_ref() else {
                return Vec::new();
            };
            ctx.view.with(|v| view::visible_rows(&snapshot.rows, v))
        })
    });

    view! {
        <div class="table-wrap">
            <Show
                when=move || has_snapshot.get()
                fallback=|| view! { <div class="empty-state">"Waiting for first snapshot…"</div> }
            >
                <table class="scanner-table">
                    <thead>
                        <tr>
                            <HeaderCell key=SortKey::Symbol label="SYMBOL" />
                            <HeaderCell key=SortKey::Signal label="SIGNAL" />
                            <HeaderCell key=SortKey::Score label="SCORE" />
                            <HeaderCell key=SortKey::Rrs label="RRS·N" />
                            <HeaderCell key=SortKey::Rrv label="RRV·N" />
                            <HeaderCell key=SortKey::Rve label="RVE·N" />
                            <th>"RRS·B"</th>
                            <th>"RRV·B"</th>
                            <th>"RVE·B"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.symbol.clone()
                            children=|row| view! { <ScannerRowView row=row /> }
                        />
                    </tbody>
                </table>
                <Show when=move || rows.with(|r| r.is_empty())>
                    <div class="empty-state">"No rows match the current filter."</div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn HeaderCell(key: SortKey, label: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let sorted = Signal::derive(move || ctx.view.with(|v| v.sort_key == key));
    let class = Signal::derive(move || if sorted.get() { "sorted" } else { "" });
    let on_click = move |_: leptos::ev::MouseEvent| {
        ctx.view.update(|v| v.click_column(key));
    };

    view! {
        <th class=class on:click=on_click>
            {label}
            <Show when=move || sorted.get()>
                {move || match ctx.view.with(|v| v.direction) {
                    SortDirection::Asc => view! { <Icon icon=ic::SORT_UP /> }.into_any(),
                    SortDirection::Desc => view! { <Icon icon=ic::SORT_DOWN /> }.into_any(),
                }}
            </Show>
        </th>
    }
}
