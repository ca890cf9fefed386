//! Pure scanner table logic: sorting, signal filtering, symbol search.
//!
//! All functions here take plain data and return plain data so they can be
//! unit tested without a browser. Components call [`visible_rows`] with the
//! current view state and render the result as-is.

use crate::models::{ScannerRow, TradeSignal};

/// Column a user can sort the table by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Backend ordering: signal rank, then score, then RVE.
    #[default]
    Signal,
    Symbol,
    Score,
    Rrs,
    Rrv,
    Rve,
}

/// Sort direction. The natural direction differs per column: symbols read
/// best ascending, metrics best descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Desc,
    Asc,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Desc => Self::Asc,
            Self::Asc => Self::Desc,
        }
    }
}

/// View state applied to the raw snapshot rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    pub sort_key: SortKey,
    pub direction: SortDirection,
    /// Only show rows whose best signal matches, when set.
    pub signal: Option<TradeSignal>,
    /// Case-insensitive substring match on the symbol.
    pub query: String,
}

impl TableView {
    /// Handle a click on a column header: same column toggles direction,
    /// a different column selects it with its natural direction.
    pub fn click_column(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.direction = self.direction.toggle();
        } else {
            self.sort_key = key;
            self.direction = natural_direction(key);
        }
    }
}

/// The direction a freshly selected column sorts in.
fn natural_direction(key: SortKey) -> SortDirection {
    match key {
        SortKey::Symbol => SortDirection::Asc,
        _ => SortDirection::Desc,
    }
}

/// Apply filter, search, and sort; returns the rows to render.
pub fn visible_rows(rows: &[ScannerRow], view: &TableView) -> Vec<ScannerRow> {
    let query = view.query.trim().to_ascii_uppercase();
    let mut out: Vec<ScannerRow> = rows
        .iter()
        .filter(|r| view.signal.is_none_or(|s| r.best_signal == s))
        .filter(|r| query.is_empty() || r.symbol.to_ascii_uppercase().contains(&query))
        .cloned()
        .collect();
    sort_rows(&mut out, view.sort_key, view.direction);
    out
}

/// Sort rows in place by the given column and direction.
///
/// `Signal` descending reproduces the backend's broadcast ordering, so an
/// untouched table matches what the server computed. Ties always fall back
/// to the symbol so the ordering is total and stable across refreshes.
pub fn sort_rows(rows: &mut [ScannerRow], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = match key {
            SortKey::Signal => a
                .best_signal
                .rank()
                .cmp(&b.best_signal.rank())
                .then(cmp_f64(b.best_score(), a.best_score()))
                .then(cmp_f64(b.best_rve(), a.best_rve())),
            SortKey::Symbol => a.symbol.cmp(&b.symbol),
            SortKey::Score => cmp_f64(b.best_score(), a.best_score()),
            SortKey::Rrs => cmp_f64(b.best_rrs(), a.best_rrs()),
            SortKey::Rrv => cmp_f64(
                b.rrv_vs_nifty.max(b.rrv_vs_bank),
                a.rrv_vs_nifty.max(a.rrv_vs_bank),
            ),
            SortKey::Rve => cmp_f64(b.best_rve(), a.best_rve()),
        };
        let ord = match direction {
            SortDirection::Desc => ord,
            SortDirection::Asc => ord.reverse(),
        };
        ord.then_with(|| a.symbol.cmp(&b.symbol))
    });
}

/// Total order over floats; NaN sorts last regardless of direction.
fn cmp_f64(a: f64, b: f64) -> std::cmp::Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timeframe;

    fn row(symbol: &str, best: TradeSignal, score: f64, rve: f64) -> ScannerRow {
        ScannerRow {
            symbol: symbol.to_string(),
            timeframe: Timeframe::M5,
            rrs_vs_nifty: score / 2.0,
            rrv_vs_nifty: 1.0,
            rve_vs_nifty: rve,
            score_vs_nifty: score,
            signal_vs_nifty: best,
            rrs_vs_bank: 0.0,
            rrv_vs_bank: 0.5,
            rve_vs_bank: 0.0,
            score_vs_bank: 0.0,
            signal_vs_bank: TradeSignal::Neutral,
            best_signal: best,
        }
    }

    fn symbols(rows: &[ScannerRow]) -> Vec<&str> {
        rows.iter().map(|r| r.symbol.as_str()).collect()
    }

    #[test]
    fn test_default_order_matches_backend() {
        let mut rows = vec![
            row("CCC", TradeSignal::Neutral, 5.0, 1.0),
            row("EEE", TradeSignal::TriggerShort, 9.0, 9.0),
            row("AAA", TradeSignal::TriggerLong, 2.0, 1.0),
            row("BBB", TradeSignal::TriggerLong, 3.0, 1.0),
            row("DDD", TradeSignal::ExitAvoid, 9.0, 9.0),
        ];
        sort_rows(&mut rows, SortKey::Signal, SortDirection::Desc);
        // Signal rank first, then score descending within a rank. Shorts
        // have no entry in the server's rank table and go last.
        assert_eq!(symbols(&rows), vec!["BBB", "AAA", "CCC", "DDD", "EEE"]);
    }

    #[test]
    fn test_server_broadcast_order_is_preserved() {
        // Rows exactly as the server would push them: one per signal, in
        // its broadcast ordering. The untouched table must not reorder.
        let server_order = vec![
            row("LONG", TradeSignal::TriggerLong, 3.0, 1.0),
            row("WTCH", TradeSignal::Watch, 2.0, 1.0),
            row("NEUT", TradeSignal::Neutral, 1.0, 1.0),
            row("EXIT", TradeSignal::ExitAvoid, 0.5, 1.0),
            row("SHRT", TradeSignal::TriggerShort, 4.0, 2.0),
        ];
        let mut rows = server_order.clone();
        sort_rows(&mut rows, SortKey::Signal, SortDirection::Desc);
        assert_eq!(symbols(&rows), symbols(&server_order));
    }

    #[test]
    fn test_signal_rank_ties_break_on_rve() {
        let mut rows = vec![
            row("LOW", TradeSignal::Watch, 1.0, 0.2),
            row("HIGH", TradeSignal::Watch, 1.0, 0.9),
        ];
        sort_rows(&mut rows, SortKey::Signal, SortDirection::Desc);
        assert_eq!(symbols(&rows), vec!["HIGH", "LOW"]);
    }

    #[test]
    fn test_symbol_sort_ascending() {
        let mut rows = vec![
            row("ZEE", TradeSignal::Neutral, 1.0, 0.0),
            row("ACC", TradeSignal::Watch, 2.0, 0.0),
        ];
        sort_rows(&mut rows, SortKey::Symbol, SortDirection::Asc);
        assert_eq!(symbols(&rows), vec!["ACC", "ZEE"]);
    }

    #[test]
    fn test_nan_sorts_last() {
        let mut rows = vec![
            row("NAN", TradeSignal::Watch, f64::NAN, 0.0),
            row("OK", TradeSignal::Watch, 1.0, 0.0),
        ];
        sort_rows(&mut rows, SortKey::Score, SortDirection::Desc);
        assert_eq!(symbols(&rows), vec!["OK", "NAN"]);
        sort_rows(&mut rows, SortKey::Score, SortDirection::Asc);
        assert_eq!(symbols(&rows), vec!["OK", "NAN"]);
    }

    #[test]
    fn test_filter_keeps_order() {
        let rows = vec![
            row("AAA", TradeSignal::TriggerLong, 3.0, 1.0),
            row("BBB", TradeSignal::Neutral, 2.0, 1.0),
            row("CCC", TradeSignal::TriggerLong, 1.0, 1.0),
        ];
        let view = TableView {
            signal: Some(TradeSignal::TriggerLong),
            ..Default::default()
        };
        let visible = visible_rows(&rows, &view);
        assert_eq!(symbols(&visible), vec!["AAA", "CCC"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let rows = vec![
            row("HDFCBANK", TradeSignal::Neutral, 1.0, 0.0),
            row("ICICIBANK", TradeSignal::Neutral, 1.0, 0.0),
            row("INFY", TradeSignal::Neutral, 1.0, 0.0),
        ];
        let view = TableView {
            query: "bank".to_string(),
            ..Default::default()
        };
        let visible = visible_rows(&rows, &view);
        assert_eq!(symbols(&visible), vec!["HDFCBANK", "ICICIBANK"]);
    }

    #[test]
    fn test_click_column_toggles_direction() {
        let mut view = TableView::default();
        view.click_column(SortKey::Score);
        assert_eq!(view.sort_key, SortKey::Score);
        assert_eq!(view.direction, SortDirection::Desc);
        view.click_column(SortKey::Score);
        assert_eq!(view.direction, SortDirection::Asc);
        view.click_column(SortKey::Symbol);
        assert_eq!(view.direction, SortDirection::Asc);
    }
}
