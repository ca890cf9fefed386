//! Page scaffold component.

use leptos::prelude::*;

use crate::components::benchmarks::Benchmarks;
use crate::components::controls::Controls;
use crate::components::scanner::ScannerTable;
use crate::components::status::Status;

/// Top-level page layout: status bar, controls row, benchmark strip, and
/// the scanner table filling the rest of the viewport.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="shell">
            <Status />
            <Controls />
            <main class="main-area">
                <Benchmarks />
                <ScannerTable />
            </main>
        </div>
    }
}
