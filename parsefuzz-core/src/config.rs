//! Process-level harness configuration, read once at start-up.

use serde::{Deserialize, Serialize};

use crate::trigger::{FaultTrigger, DEMO_CRASH_ENV};

/// Settings shared by every invocation in a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub struct HarnessConfig {
    /// Demo crash behaviour. Off by default.
    pub fault_trigger: FaultTrigger,
}

impl HarnessConfig {
    /// Create a config with an explicit trigger.
    #[must_use]
    pub const fn new(fault_trigger: FaultTrigger) -> Self {
        Self { fault_trigger }
    }

    /// Build the config from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(DEMO_CRASH_ENV);
        let fault_trigger = FaultTrigger::from_env_value(raw.as_deref());
        tracing::debug!(
            var = DEMO_CRASH_ENV,
            value = raw.as_deref().unwrap_or("<unset>"),
            enabled = fault_trigger.enabled,
            "demo crash trigger configured"
        );
        Self { fault_trigger }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_trigger_disabled() {
        assert_eq!(HarnessConfig::default().fault_trigger, FaultTrigger::disabled());
    }

    #[test]
    fn lookup_reads_demo_crash_variable() {
        let config = HarnessConfig::from_lookup(|name| {
            (name == DEMO_CRASH_ENV).then(|| "true".to_owned())
        });
        assert!(config.fault_trigger.enabled);
    }

    #[test]
    fn unset_variable_leaves_trigger_off() {
        let config = HarnessConfig::from_lookup(|_| None);
        assert!(!config.fault_trigger.enabled);
    }

    #[test]
    fn config_serializes_trigger_flag() {
        let json = serde_json::to_value(HarnessConfig::new(FaultTrigger::enabled()))
            .expect("config serializes");
        assert_eq!(json, serde_json::json!({"fault_trigger": {"enabled": true}}));
    }
}
