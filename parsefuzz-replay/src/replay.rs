//! Running saved inputs through the adapter and summarising the outcomes.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parsefuzz_core::{Harness, JsonBackend, Outcome};
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::ReplayError;

/// SHA-256 of an input's bytes, used to name inputs in logs and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputDigest([u8; 32]);

impl InputDigest {
    /// Hash `data`.
    #[must_use]
    pub fn of(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }
}

impl fmt::Display for InputDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for InputDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of replaying one input.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ReplayRecord {
    /// File the input was read from.
    pub path: PathBuf,
    /// Input length in bytes.
    pub len: usize,
    /// SHA-256 of the input.
    pub sha256: InputDigest,
    /// What the adapter did with it.
    pub outcome: Outcome,
}

/// Totals for a replay run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ReplaySummary {
    /// When the run began.
    pub started_at: DateTime<Utc>,
    /// Whether the demo crash was armed.
    pub demo_crash: bool,
    /// Number of inputs replayed.
    pub inputs: usize,
    /// Inputs the parser accepted.
    pub parsed: usize,
    /// Inputs the parser rejected.
    pub rejected: usize,
    /// Inputs skipped because their buffer could not be allocated.
    pub skipped: usize,
    /// Per-input results, in replay order.
    pub records: Vec<ReplayRecord>,
}

impl ReplaySummary {
    fn new(demo_crash: bool) -> Self {
        Self {
            started_at: Utc::now(),
            demo_crash,
            inputs: 0,
            parsed: 0,
            rejected: 0,
            skipped: 0,
            records: Vec::new(),
        }
    }

    fn push(&mut self, record: ReplayRecord) {
        self.inputs += 1;
        match record.outcome {
            Outcome::Parsed => self.parsed += 1,
            Outcome::Rejected => self.rejected += 1,
            // `Outcome` is non_exhaustive across crates.
            _ => self.skipped += 1,
        }
        self.records.push(record);
    }

    /// Render as one line per input followed by a totals line.
    #[must_use]
    pub fn to_text(&self) -> String {
        use fmt::Write as _;

        let mut out = String::new();
        for r in &self.records {
            let _ = writeln!(
                out,
                "{:<8} {} {:>8}B {}",
                outcome_label(r.outcome),
                &r.sha256.to_string()[..12],
                r.len,
                r.path.display()
            );
        }
        let _ = writeln!(
            out,
            "replayed {} input(s): {} parsed, {} rejected, {} skipped",
            self.inputs, self.parsed, self.rejected, self.skipped
        );
        out
    }

    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`ReplayError::Report`] if encoding fails.
    pub fn to_json(&self) -> Result<String, ReplayError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Parsed => "parsed",
        Outcome::Rejected => "rejected",
        _ => "skipped",
    }
}

/// Replays files through a harness, one at a time, in the order given.
#[derive(Debug)]
pub struct Replayer<B: JsonBackend> {
    harness: Harness<B>,
}

impl<B: JsonBackend> Replayer<B> {
    /// Wrap a configured harness.
    #[must_use]
    pub fn new(harness: Harness<B>) -> Self {
        Self { harness }
    }

    /// Replay a single file.
    ///
    /// # Errors
    /// Returns [`ReplayError::ReadInput`] if the file cannot be read.
    pub fn replay_file(&self, path: &Path) -> Result<ReplayRecord, ReplayError> {
        let data = std::fs::read(path).map_err(|source| ReplayError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        let sha256 = InputDigest::of(&data);

        tracing::debug!(path = %path.display(), len = data.len(), %sha256, "replaying input");
        let outcome = self.harness.process(&data);
        tracing::debug!(%sha256, ?outcome, "input done");

        Ok(ReplayRecord { path: path.to_path_buf(), len: data.len(), sha256, outcome })
    }

    /// Replay every file in `inputs`.
    ///
    /// Stops at the first unreadable file.
    ///
    /// # Errors
    /// Returns [`ReplayError::ReadInput`] if a file cannot be read.
    pub fn replay_all(&self, inputs: &[PathBuf]) -> Result<ReplaySummary, ReplayError> {
        let mut summary = ReplaySummary::new(self.harness.config().fault_trigger.enabled);
        for path in inputs {
            summary.push(self.replay_file(path)?);
        }

        tracing::info!(
            inputs = summary.inputs,
            parsed = summary.parsed,
            rejected = summary.rejected,
            skipped = summary.skipped,
            "replay complete"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use parsefuzz_core::{FaultTrigger, HarnessConfig, SerdeJsonBackend};

    use super::*;

    fn write(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, data).expect("write input");
        path
    }

    #[test]
    fn digest_of_empty_input_matches_known_sha256() {
        assert_eq!(
            InputDigest::of(b"").to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn replay_counts_each_outcome() {
        let dir = tempfile::tempdir().expect("tempdir");
        let inputs = vec![
            write(dir.path(), "empty", b""),
            write(dir.path(), "object", br#"{"a":1}"#),
            write(dir.path(), "broken", b"{invalid"),
        ];

        let summary = Replayer::new(Harness::with_defaults())
            .replay_all(&inputs)
            .expect("replay succeeds");

        assert_eq!(summary.inputs, 3);
        assert_eq!(summary.parsed, 1);
        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.skipped, 0);
        assert!(!summary.demo_crash);
        assert_eq!(summary.records[1].outcome, Outcome::Parsed);
        assert_eq!(summary.records[1].len, 7);
    }

    #[test]
    fn armed_replay_of_clean_inputs_completes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let inputs = vec![write(dir.path(), "object", br#"{"a":1}"#)];
        let harness = Harness::new(
            SerdeJsonBackend::new(),
            HarnessConfig::new(FaultTrigger::enabled()),
        );

        let summary = Replayer::new(harness).replay_all(&inputs).expect("replay succeeds");
        assert!(summary.demo_crash);
        assert_eq!(summary.parsed, 1);
    }

    #[test]
    fn skipped_records_are_counted_separately() {
        let mut summary = ReplaySummary::new(false);
        summary.push(ReplayRecord {
            path: PathBuf::from("huge"),
            len: 0,
            sha256: InputDigest::of(b""),
            outcome: Outcome::Skipped,
        });
        assert_eq!(summary.inputs, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.parsed + summary.rejected, 0);
        assert!(summary.to_text().starts_with("skipped "), "got {}", summary.to_text());
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("gone");
        let err = Replayer::new(Harness::with_defaults())
            .replay_all(&[missing.clone()])
            .expect_err("file does not exist");
        assert!(matches!(err, ReplayError::ReadInput { path, .. } if path == missing));
    }

    #[test]
    fn text_and_json_reports_carry_totals() {
        let dir = tempfile::tempdir().expect("tempdir");
        let inputs = vec![write(dir.path(), "object", br#"{"a":1}"#)];
        let summary = Replayer::new(Harness::with_defaults())
            .replay_all(&inputs)
            .expect("replay succeeds");

        let text = summary.to_text();
        assert!(text.contains("1 parsed, 0 rejected, 0 skipped"), "got {text}");

        let json: serde_json::Value =
            serde_json::from_str(&summary.to_json().expect("encodes")).expect("valid json");
        assert_eq!(json["parsed"], 1);
        assert_eq!(json["records"][0]["outcome"], "parsed");
        assert_eq!(json["records"][0]["sha256"].as_str().map(str::len), Some(64));
    }
}
