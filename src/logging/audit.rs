// Structured facts for locator queries.
//
// Every fact carries a minimal envelope: `schema_version`, `ts`, `profile`, `stage`, `decision`.
// Facts are observational only; errors are still returned to the caller unchanged.
use serde_json::{json, Map, Value};

use crate::api::errors::{exit_code_for, id_str, LocatorError};
use crate::constants::{FACTS_SCHEMA_VERSION, FACTS_SUBSYSTEM};
use crate::logging::{redact_event, FactsEmitter};

pub(crate) struct AuditCtx<'a> {
    pub facts: &'a dyn FactsEmitter,
    pub profile: String,
    pub ts: String,
    pub redact: bool,
}

impl<'a> AuditCtx<'a> {
    pub(crate) fn new(facts: &'a dyn FactsEmitter, profile: &str, ts: String) -> Self {
        Self {
            facts,
            profile: profile.to_string(),
            ts,
            redact: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    LatestResolve,
    PreviousResolve,
    SnapshotsList,
}

impl Stage {
    #[must_use]
    pub const fn as_event(&self) -> &'static str {
        match self {
            Stage::LatestResolve => "latest.resolve",
            Stage::PreviousResolve => "previous.resolve",
            Stage::SnapshotsList => "snapshots.list",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Success,
    Failure,
}

impl Decision {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Decision::Success => "success",
            Decision::Failure => "failure",
        }
    }
}

pub struct StageLogger<'a> {
    ctx: &'a AuditCtx<'a>,
}

impl<'a> StageLogger<'a> {
    pub(crate) fn new(ctx: &'a AuditCtx<'a>) -> Self {
        Self { ctx }
    }

    pub fn latest_resolve(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::LatestResolve)
    }
    pub fn previous_resolve(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::PreviousResolve)
    }
    pub fn snapshots_list(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::SnapshotsList)
    }
}

pub struct EventBuilder<'a> {
    ctx: &'a AuditCtx<'a>,
    stage: Stage,
    fields: Map<String, Value>,
}

impl<'a> EventBuilder<'a> {
    fn new(ctx: &'a AuditCtx<'a>, stage: Stage) -> Self {
        let mut fields = Map::new();
        fields.insert("stage".to_string(), json!(stage.as_event()));
        Self { ctx, stage, fields }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.fields.insert("path".into(), json!(path.into()));
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn error(mut self, err: &LocatorError) -> Self {
        let id = err.id();
        self.fields.insert("error".into(), json!(err.to_string()));
        self.fields.insert("error_id".into(), json!(id_str(id)));
        self.fields.insert("exit_code".into(), json!(exit_code_for(id)));
        self
    }

    pub fn emit(self, decision: Decision) {
        let mut fields = self.fields;
        fields.entry("schema_version").or_insert(json!(FACTS_SCHEMA_VERSION));
        fields.entry("ts").or_insert(json!(self.ctx.ts));
        fields.entry("profile").or_insert(json!(self.ctx.profile));
        fields.entry("decision").or_insert(json!(decision.as_str()));
        let out = if self.ctx.redact {
            redact_event(Value::Object(fields))
        } else {
            Value::Object(fields)
        };
        self.ctx
            .facts
            .emit(FACTS_SUBSYSTEM, self.stage.as_event(), decision.as_str(), out);
    }

    pub fn emit_success(self) {
        self.emit(Decision::Success)
    }
    pub fn emit_failure(self) {
        self.emit(Decision::Failure)
    }
}
