//! Controls row: timeframe selector, signal filter chips, symbol search.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::TIMEFRAMES;
use crate::models::{Timeframe, TradeSignal};

#[component]
pub fn Controls() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let on_timeframe = move |ev: leptos::ev::Event| {
        if let Some(tf) = Timeframe::parse(&event_target_value(&ev)) {
            ctx.timeframe.set(tf);
        }
    };

    let on_query = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        ctx.view.update(|v| v.query = value);
    };

    view! {
        <div class="controls">
            <select on:change=on_timeframe>
                {TIMEFRAMES
                    .iter()
                    .map(|tf| {
                        let tf = *tf;
                        view! {
                            <option
                                value=tf.as_str()
                                selected=move || ctx.timeframe.get() == tf
                            >
                                {tf.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            {TradeSignal::all()
                .iter()
                .map(|signal| {
                    let signal = *signal;
                    view! { <SignalChip signal=signal /> }
                })
                .collect_view()}

            <div class="spacer"></div>

            <span>
                <Icon icon=ic::SEARCH />
                <input
                    type="text"
                    placeholder="symbol"
                    prop:value=move || ctx.view.with(|v| v.query.clone())
                    on:input=on_query
                />
            </span>
        </div>
    }
}

/// One filter chip. Clicking it filters the table to that signal; clicking
/// the active chip clears the filter.
#[component]
fn SignalChip(signal: TradeSignal) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let active = Signal::derive(move || ctx.view.with(|v| v.signal == Some(signal)));
    let class = Signal::derive(move || {
        if active.get() {
            "filter-chip active"
        } else {
            "filter-chip"
        }
    });

    let on_click = move |_: leptos::ev::MouseEvent| {
        ctx.view.update(|v| {
            v.signal = if v.signal == Some(signal) {
                None
            } else {
                Some(signal)
            };
        });
    };

    view! {
        <button class=class on:click=on_click>
            {signal.label()}
        </button>
    }
}
