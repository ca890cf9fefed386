//! One scanner table row.

use leptos::prelude::*;

use crate::models::ScannerRow;
use crate::utils::format;

/// A single symbol row. Metric cells against the broad index come first,
/// then the banking index, matching the header order in the parent table.
#[component]
pub fn ScannerRowView(row: ScannerRow) -> impl IntoView {
    let badge_class = format!("signal-badge {}", row.best_signal.css_class());

    view! {
        <tr>
            <td>{row.symbol.clone()}</td>
            <td>
                <span class=badge_class>{row.best_signal.label()}</span>
            </td>
            <td>{format::format_score(row.best_score())}</td>
            <MetricCell value=row.rrs_vs_nifty />
            <MetricCell value=row.rrv_vs_nifty />
            <MetricCell value=row.rve_vs_nifty />
            <MetricCell value=row.rrs_vs_bank />
            <MetricCell value=row.rrv_vs_bank />
            <MetricCell value=row.rve_vs_bank />
        </tr>
    }
}

#[component]
fn MetricCell(value: f64) -> impl IntoView {
    view! { <td class=format::metric_class(value)>{format::format_metric(value)}</td> }
}
