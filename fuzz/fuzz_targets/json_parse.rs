//! Fuzz target: JSON parsing through the input adapter.
//!
//! Every input is copied into a null-terminated working buffer and parsed;
//! parsed documents are released before returning. Rejections are expected
//! and fine, panics are not.

#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use parsefuzz_core::{Harness, SerdeJsonBackend};

static HARNESS: OnceLock<Harness<SerdeJsonBackend>> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    HARNESS.get_or_init(Harness::with_defaults).test_one_input(data);
});
