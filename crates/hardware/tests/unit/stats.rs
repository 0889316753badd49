//! # Statistics Tests
//!
//! Rates, the empty-run summary and the printed report format.

use pretty_assertions::assert_eq;
use vmsim_core::stats::{Summary, TranslationStats};

fn stats(translated: u64, page_faults: u64, tlb_hits: u64) -> TranslationStats {
    TranslationStats {
        translated,
        page_faults,
        tlb_hits,
    }
}

#[test]
fn empty_run_has_no_rates() {
    let s = TranslationStats::default();
    assert_eq!(s.page_fault_rate(), None);
    assert_eq!(s.tlb_hit_rate(), None);
    assert_eq!(s.summary(), Summary::Empty);
    assert_eq!(s.summary().to_string(), "No translations performed");
}

#[test]
fn rates_use_their_own_scales() {
    let s = stats(1000, 244, 54);
    assert_eq!(s.tlb_misses(), 946);
    assert!((s.page_fault_rate().unwrap() - 24.4).abs() < 1e-9);
    assert_eq!(s.tlb_hit_rate(), Some(0.054));
}

#[test]
fn summary_prints_six_decimals() {
    let text = stats(3, 2, 1).summary().to_string();
    assert_eq!(
        text,
        "Percentage of Page Faults = 66.666667\nTLB Hit Rate = 0.333333"
    );
}

#[test]
fn all_hits_and_all_faults() {
    assert_eq!(
        stats(4, 4, 0).summary().to_string(),
        "Percentage of Page Faults = 100.000000\nTLB Hit Rate = 0.000000"
    );
    assert_eq!(stats(4, 0, 4).tlb_hit_rate(), Some(1.0));
}

#[test]
fn serializes_counters_and_summary() {
    let s = stats(2, 1, 1);
    let json = serde_json::to_value(s).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "translated": 2, "page_faults": 1, "tlb_hits": 1 })
    );

    let summary = serde_json::to_value(s.summary()).unwrap();
    assert_eq!(
        summary,
        serde_json::json!({ "kind": "rates", "page_fault_rate": 50.0, "tlb_hit_rate": 0.5 })
    );
    assert_eq!(
        serde_json::to_value(Summary::Empty).unwrap(),
        serde_json::json!({ "kind": "empty" })
    );
}
