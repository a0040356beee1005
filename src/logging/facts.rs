use log::Level;
use serde_json::Value;

pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

/// Discards everything. Default sink for callers that do not collect facts.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FactsEmitter for NullSink {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, _fields: Value) {}
}

impl AuditSink for NullSink {
    fn log(&self, _level: Level, _msg: &str) {}
}

/// Forwards facts and audit lines to the `log` facade, facts as one JSON object per line.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl FactsEmitter for LogSink {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        let level = if decision == "failure" { Level::Warn } else { Level::Info };
        log::log!(target: "datadb::facts", level, "{subsystem} {event} {decision} {fields}");
    }
}

impl AuditSink for LogSink {
    fn log(&self, level: Level, msg: &str) {
        log::log!(target: "datadb::audit", level, "{msg}");
    }
}
