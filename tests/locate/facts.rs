use log::Level;
use serde_json::json;

use datadb::logging::{redact_event, TS_ZERO};
use datadb::LocatorBuilder;

use crate::helpers::facts::{TestAudit, TestEmitter};
use crate::helpers::testroot::TestRoot;

#[test]
fn latest_emits_one_success_fact() {
    let root = TestRoot::new();
    root.snapshot("pg", "2023-01-01T00:00:00.000000");
    let facts = TestEmitter::default();
    let audit = TestAudit::default();
    let loc = LocatorBuilder::new(facts.clone(), audit.clone())
        .config(root.config())
        .build();

    let path = loc.latest_backup("pg").unwrap();
    let evs = facts.take();
    assert_eq!(evs.len(), 1);
    let (subsystem, event, decision, fields) = &evs[0];
    assert_eq!(subsystem, "datadb");
    assert_eq!(event, "latest.resolve");
    assert_eq!(decision, "success");
    assert_eq!(fields["profile"], json!("pg"));
    assert_eq!(fields["snapshot"], json!("2023-01-01T00:00:00.000000"));
    assert_eq!(fields["path"], json!(path.display().to_string()));
    assert!(audit.lines.lock().unwrap().iter().any(|(l, _)| *l == Level::Debug));
}

#[test]
fn failures_emit_failure_fact_and_still_return_error() {
    let root = TestRoot::new();
    let facts = TestEmitter::default();
    let loc = LocatorBuilder::new(facts.clone(), TestAudit::default())
        .config(root.config())
        .build();

    assert!(loc.latest_backup("ghost").is_err());
    let evs = facts.take();
    assert_eq!(evs.len(), 1);
    assert_eq!(evs[0].2, "failure");
    assert_eq!(evs[0].3["error_id"], json!("E_NO_BACKUP"));
    assert_eq!(evs[0].3["exit_code"], json!(60));
}

#[test]
fn redacted_facts_are_deterministic() {
    let root = TestRoot::new();
    root.snapshot("pg", "2023-01-01T00:00:00.000000");
    let facts = TestEmitter::default();
    let loc = LocatorBuilder::new(facts.clone(), TestAudit::default())
        .config(root.config())
        .redact_facts(true)
        .build();

    loc.latest_backup("pg").unwrap();
    loc.latest_backup("pg").unwrap();
    let evs = facts.take();
    assert_eq!(evs[0].3, evs[1].3);
    assert_eq!(evs[0].3["ts"], json!(TS_ZERO));
    assert_eq!(redact_event(evs[0].3.clone()), evs[0].3);
}

#[test]
fn list_and_previous_emit_their_own_stages() {
    let root = TestRoot::new();
    root.snapshot("pg", "2023-01-01T00:00:00.000000");
    let facts = TestEmitter::default();
    let loc = LocatorBuilder::new(facts.clone(), TestAudit::default())
        .config(root.config())
        .build();

    loc.snapshots("pg").unwrap();
    loc.previous_backup("pg").unwrap();
    let events: Vec<String> = facts.take().into_iter().map(|e| e.1).collect();
    assert_eq!(events, ["snapshots.list", "previous.resolve"]);
}
