use crate::config::LocatorConfig;
use crate::logging::{AuditSink, FactsEmitter};

/// Builder for constructing a `BackupLocator` with ergonomic chaining.
pub struct LocatorBuilder<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    config: LocatorConfig,
    redact_facts: bool,
}

impl<E: FactsEmitter, A: AuditSink> LocatorBuilder<E, A> {
    /// Starts from `LocatorConfig::default()`.
    pub fn new(facts: E, audit: A) -> Self {
        Self {
            facts,
            audit,
            config: LocatorConfig::default(),
            redact_facts: false,
        }
    }

    #[must_use]
    pub fn config(mut self, config: LocatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the config with `LocatorConfig::from_env()`.
    #[must_use]
    pub fn config_from_env(self) -> Self {
        self.config(LocatorConfig::from_env())
    }

    #[must_use]
    pub fn redact_facts(mut self, on: bool) -> Self {
        self.redact_facts = on;
        self
    }

    pub fn build(self) -> super::BackupLocator<E, A> {
        let api = super::BackupLocator::new(self.facts, self.audit, self.config);
        if self.redact_facts {
            api.with_redacted_facts()
        } else {
            api
        }
    }
}
