//! Opt-in demo crash used to check that the surrounding fuzzing and
//! crash-reporting setup notices a dead process.

use serde::{Deserialize, Serialize};

use crate::buffer::WorkingBuffer;

/// Environment variable that enables the demo crash.
pub const DEMO_CRASH_ENV: &str = "PARSEFUZZ_DEMO_CRASH";

/// Substring that makes an enabled trigger abort the process.
pub const CRASH_MARKER: &[u8] = b"CRASHME";

/// Values of [`DEMO_CRASH_ENV`] that count as "on". Matched exactly.
const AFFIRMATIVE: [&str; 3] = ["1", "true", "TRUE"];

/// Whether inputs containing [`CRASH_MARKER`] abort the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub struct FaultTrigger {
    /// True when the demo crash is armed.
    pub enabled: bool,
}

impl FaultTrigger {
    /// A trigger that never fires.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    /// A trigger that fires on inputs containing [`CRASH_MARKER`].
    #[must_use]
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Interpret a raw [`DEMO_CRASH_ENV`] value. Anything other than
    /// `1`, `true` or `TRUE` (including absence) leaves the trigger off.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        Self {
            enabled: value.is_some_and(|v| AFFIRMATIVE.contains(&v)),
        }
    }

    /// Pure decision: would [`check`](Self::check) abort on this buffer?
    ///
    /// The search runs over the C string view of the buffer, so a marker
    /// placed after an embedded NUL is not seen.
    #[must_use]
    pub fn should_fire(&self, buffer: &WorkingBuffer) -> bool {
        self.enabled && contains_marker(buffer.as_c_str_prefix())
    }

    /// Abort the process if the trigger fires; otherwise return.
    pub fn check(&self, buffer: &WorkingBuffer) {
        if self.should_fire(buffer) {
            tracing::error!(
                len = buffer.len(),
                marker = %String::from_utf8_lossy(CRASH_MARKER),
                "demo crash marker found, aborting"
            );
            std::process::abort();
        }
    }
}

fn contains_marker(haystack: &[u8]) -> bool {
    haystack
        .windows(CRASH_MARKER.len())
        .any(|window| window == CRASH_MARKER)
}
