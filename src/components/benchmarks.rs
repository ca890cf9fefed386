//! Benchmark regime cards.
//!
//! One card per benchmark index (NIFTY, BANKNIFTY) showing its current
//! regime classification and the three regime inputs.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::BenchmarkState;
use crate::utils::format;

#[component]
pub fn Benchmarks() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let states = Memo::new(move |_| {
        ctx.benchmarks
            .with(|b| b.as_ref().map(|snap| snap.states.clone()))
            .unwrap_or_default()
    });

    view! {
        <section class="benchmarks">
            <For
                each=move || states.get()
                key=|state| state.benchmark.clone()
                children=|state| view! { <BenchmarkCard state=state /> }
            />
        </section>
    }
}

#[component]
fn BenchmarkCard(state: BenchmarkState) -> impl IntoView {
    let regime_class = format!("regime {}", state.regime.css_class());

    view! {
        <article class="benchmark-card">
            <div class="card-head">
                <b>{state.benchmark.clone()}</b>
                <span class=regime_class>{state.regime.label()}</span>
            </div>
            <div class="metrics">
                <span>"trend " <b>{format::format_metric(state.trend)}</b></span>
                <span>"vol " <b>{format::format_score(state.vol_expansion)}</b></span>
                <span>"part " <b>{format::format_score(state.participation)}</b></span>
            </div>
        </article>
    }
}
