//! Fuzz target: JSON parsing with the opt-in demo crash.
//!
//! Same adapter as `json_parse`. With `PARSEFUZZ_DEMO_CRASH` set to `1`,
//! `true` or `TRUE`, any input containing `CRASHME` aborts the process so
//! the crash-reporting path can be checked end to end. The variable is read
//! once, on the first input.

#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use parsefuzz_core::{Harness, HarnessConfig, SerdeJsonBackend};

static HARNESS: OnceLock<Harness<SerdeJsonBackend>> = OnceLock::new();

fn harness() -> &'static Harness<SerdeJsonBackend> {
    HARNESS.get_or_init(|| Harness::new(SerdeJsonBackend::new(), HarnessConfig::from_env()))
}

fuzz_target!(|data: &[u8]| {
    harness().test_one_input(data);
});
