//! Report rendering for suite results

use crate::suite::SuiteResult;
use chrono::Utc;
use std::fmt::Write;

/// Render results as an aligned text table with a UTC timestamp header
pub fn format_report(results: &[SuiteResult]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(86);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "PAIR LOOKUP BENCHMARK  ({})",
        Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    );
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "{:<10} {:>10} {:>10} {:>10} {:>12} {:>11} {:>9} {:>9}",
        "strategy", "population", "populated", "entries", "populate ms", "lookup ms", "ns/op", "misses"
    );
    let _ = writeln!(out, "{}", "-".repeat(86));

    for r in results {
        let _ = writeln!(
            out,
            "{:<10} {:>10} {:>10} {:>10} {:>12.2} {:>11} {:>9.1} {:>9}",
            r.strategy.as_str(),
            r.population.to_string(),
            r.populated,
            r.entries,
            r.populate_time.as_nanos() as f64 / 1_000_000.0,
            r.lookup.elapsed_ms(),
            r.lookup.ns_per_lookup(),
            r.lookup.misses,
        );
    }

    if results.is_empty() {
        let _ = writeln!(out, "(no results)");
    }
    out
}

/// Render results as pretty-printed JSON
pub fn to_json(results: &[SuiteResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
