//! Integration tests: the driver-facing scenarios through the public API.

use parsefuzz_core::{FaultTrigger, Harness, HarnessConfig, Outcome, SerdeJsonBackend};

fn armed() -> Harness<SerdeJsonBackend> {
    Harness::new(SerdeJsonBackend::new(), HarnessConfig::new(FaultTrigger::enabled()))
}

#[test]
fn empty_input_returns_zero_without_document() {
    let harness = Harness::with_defaults();
    assert_eq!(harness.process(b""), Outcome::Rejected);
    assert_eq!(harness.test_one_input(b""), 0);
}

#[test]
fn small_object_is_parsed() {
    let harness = Harness::with_defaults();
    assert_eq!(harness.process(br#"{"a":1}"#), Outcome::Parsed);
    assert_eq!(harness.test_one_input(br#"{"a":1}"#), 0);
}

#[test]
fn malformed_object_is_rejected() {
    let harness = Harness::with_defaults();
    assert_eq!(harness.process(b"{invalid"), Outcome::Rejected);
    assert_eq!(harness.test_one_input(b"{invalid"), 0);
}

#[test]
fn armed_trigger_without_marker_behaves_like_default() {
    let input = br#"{"a":1}"#;
    assert_eq!(armed().process(input), Harness::with_defaults().process(input));
}

#[test]
fn default_harness_ignores_marker() {
    assert!(!Harness::with_defaults().config().fault_trigger.enabled);
    assert_eq!(Harness::with_defaults().test_one_input(b"CRASHME"), 0);
}

#[test]
fn deeply_nested_input_terminates() {
    // serde_json's recursion limit turns this into an ordinary rejection.
    let input = "[".repeat(100_000);
    assert_eq!(Harness::with_defaults().process(input.as_bytes()), Outcome::Rejected);
}
