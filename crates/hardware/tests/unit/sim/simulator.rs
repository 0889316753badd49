//! # Simulator Tests
//!
//! Runs whole traces through the simulator and checks the written report,
//! record rejection and the handling of fatal backing-store errors.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use vmsim_core::common::{AccessType, RecordError, SimError, VirtAddr};
use vmsim_core::config::Config;
use vmsim_core::sim::{AddressTrace, DiskImage, RejectedRecord, Simulator};

use crate::common::harness::{expected_value, patterned_image};
use crate::common::mocks::backing_store::{MockStore, RecordingStore, truncated_store};

fn trace(text: &str) -> AddressTrace<Cursor<Vec<u8>>> {
    AddressTrace::new(Cursor::new(text.as_bytes().to_vec()))
}

fn simulator(config: Config) -> Simulator<DiskImage<Cursor<Vec<u8>>>> {
    Simulator::new(config, DiskImage::from_bytes(patterned_image()).unwrap())
}

#[test]
fn writes_one_line_per_translation_then_summary() {
    let mut sim = simulator(Config::default());
    let mut out = Vec::new();
    let report = sim.run(trace("0\n256\n0\n"), &mut out).unwrap();

    let expected = format!(
        "Virtual address: 0 Physical address: 0 Value: {}\n\
         Virtual address: 256 Physical address: 256 Value: {}\n\
         Virtual address: 0 Physical address: 0 Value: {}\n\
         \n\
         Percentage of Page Faults = 66.666667\n\
         TLB Hit Rate = 0.333333\n",
        expected_value(0),
        expected_value(256),
        expected_value(0),
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
    assert_eq!(report.stats.translated, 3);
    assert_eq!(report.stats.page_faults, 2);
    assert_eq!(report.stats.tlb_hits, 1);
    assert!(report.rejected.is_empty());
}

#[test]
fn rejected_records_are_skipped_and_reported() {
    let mut sim = simulator(Config::default());
    let mut out = Vec::new();
    let report = sim
        .run(trace("100\n65536\nbogus\n200\n"), &mut out)
        .unwrap();

    assert_eq!(report.stats.translated, 2);
    assert_eq!(
        report.rejected,
        vec![
            RejectedRecord {
                line: 2,
                error: RecordError::AddressOutOfRange(65536),
            },
            RejectedRecord {
                line: 3,
                error: RecordError::MalformedRecord("bogus".to_owned()),
            },
        ]
    );
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Virtual address:").count(), 2);
}

#[test]
fn empty_trace_reports_no_translations() {
    let mut sim = simulator(Config::default());
    let mut out = Vec::new();
    let report = sim.run(trace(""), &mut out).unwrap();

    assert_eq!(report.stats.translated, 0);
    assert_eq!(String::from_utf8(out).unwrap(), "\nNo translations performed\n");
}

#[test]
fn only_rejected_records_reports_no_translations() {
    let mut sim = simulator(Config::default());
    let mut out = Vec::new();
    let report = sim.run(trace("x\n70000\n"), &mut out).unwrap();

    assert_eq!(report.rejected.len(), 2);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("No translations performed"));
    assert!(!text.contains("NaN"));
}

#[test]
fn output_sections_can_be_disabled() {
    let mut config = Config::default();
    config.output.translations = false;
    config.output.summary = false;

    let mut sim = simulator(config);
    let mut out = Vec::new();
    let report = sim.run(trace("1\n2\n3\n"), &mut out).unwrap();

    assert!(out.is_empty());
    assert_eq!(report.stats.translated, 3);
}

#[test]
fn backing_store_failure_stops_the_run() {
    let mut sim = Simulator::new(Config::default(), truncated_store());
    let mut out = Vec::new();
    let err = sim.run(trace("5\n6\n"), &mut out).unwrap_err();

    assert!(matches!(err, SimError::BackingStore { page: 0, .. }));
    assert_eq!(sim.mmu().stats().translated, 0);
}

/// Faults after the first succeed until the store breaks; earlier output stays written.
#[test]
fn failure_mid_run_keeps_earlier_results() {
    let mut store = MockStore::new();
    let mut calls = 0;
    let _ = store.expect_read_page().returning(move |_, buf| {
        calls += 1;
        if calls == 1 {
            buf.fill(9);
            Ok(())
        } else {
            Err(std::io::Error::other("disk gone"))
        }
    });

    let mut sim = Simulator::new(Config::default(), store);
    let mut out = Vec::new();
    let err = sim.run(trace("10\n11\n5000\n12\n"), &mut out).unwrap_err();

    assert!(matches!(err, SimError::BackingStore { page: 19, .. }));
    assert_eq!(sim.mmu().stats().translated, 2);
    assert_eq!(sim.mmu().stats().page_faults, 1);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("Virtual address: 10 Physical address: 10 Value: 9"));
}

#[test]
fn configured_access_type_is_used() {
    let mut config = Config::default();
    config.general.access = AccessType::Read;
    let mut sim = Simulator::new(config, RecordingStore::default());

    let t = sim.translate(VirtAddr::new(42)).unwrap();
    assert_eq!(t.access, AccessType::Read);
    assert_eq!(sim.config().general.access, AccessType::Read);
}

#[test]
fn reset_clears_counters_between_runs() {
    let mut sim = Simulator::new(Config::default(), RecordingStore::default());
    let mut out = Vec::new();
    let _ = sim.run(trace("1\n2\n"), &mut out).unwrap();
    sim.reset();

    let report = sim.run(trace("300\n"), &mut out).unwrap();
    assert_eq!(report.stats.translated, 1);
    assert_eq!(report.stats.page_faults, 1);

    let store = sim.into_store();
    assert_eq!(store.reads, vec![0, 1]);
}

/// Independent simulators never share counters.
#[test]
fn simulators_are_independent() {
    let mut a = Simulator::new(Config::default(), RecordingStore::default());
    let mut b = Simulator::new(Config::default(), RecordingStore::default());
    let mut sink = Vec::new();

    let _ = a.run(trace("1\n2\n3\n"), &mut sink).unwrap();
    let report = b.run(trace("7\n"), &mut sink).unwrap();
    assert_eq!(report.stats.translated, 1);
    assert_eq!(a.mmu().stats().translated, 3);
}
