use std::path::PathBuf;
use std::time::Instant;

use log::Level;
use serde_json::json;

use super::errors::{LocatorError, NoBackupReason};
use super::BackupLocator;
use crate::fs::{latest as newest_of, previous as previous_of, scan_snapshots};
use crate::logging::audit::{AuditCtx, EventBuilder, StageLogger};
use crate::logging::{now_iso, AuditSink, FactsEmitter};
use crate::types::SnapshotStamp;

fn audit_ctx<'a, E: FactsEmitter, A: AuditSink>(
    api: &'a BackupLocator<E, A>,
    profile: &str,
) -> AuditCtx<'a> {
    let mut ctx = AuditCtx::new(&api.facts as &dyn FactsEmitter, profile, now_iso());
    ctx.redact = api.redact_facts;
    ctx
}

fn elapsed_us(t0: Instant) -> u64 {
    u64::try_from(t0.elapsed().as_micros()).unwrap_or(u64::MAX)
}

fn level_for(err: &LocatorError) -> Level {
    match err {
        LocatorError::NoBackup { .. } => Level::Info,
        LocatorError::InvalidSnapshotName { .. } => Level::Warn,
        LocatorError::Io { .. } => Level::Error,
    }
}

fn fail<E: FactsEmitter, A: AuditSink>(
    api: &BackupLocator<E, A>,
    ev: EventBuilder<'_>,
    t0: Instant,
    what: &str,
    profile: &str,
    err: &LocatorError,
) {
    ev.error(err)
        .field("duration_us", json!(elapsed_us(t0)))
        .emit_failure();
    api.audit
        .log(level_for(err), &format!("{what} for {profile} unavailable: {err}"));
}

fn scan(root: &std::path::Path, profile: &str) -> Result<Vec<SnapshotStamp>, LocatorError> {
    scan_snapshots(root, profile).map(|(_, stamps)| stamps)
}

pub(crate) fn latest<E: FactsEmitter, A: AuditSink>(
    api: &BackupLocator<E, A>,
    profile: &str,
) -> Result<PathBuf, LocatorError> {
    let t0 = Instant::now();
    let ctx = audit_ctx(api, profile);
    let slog = StageLogger::new(&ctx);

    // A successful scan is never empty; the fallback only keeps this free of panics.
    let outcome = scan(api.root(), profile).and_then(|stamps| {
        newest_of(&stamps).ok_or_else(|| LocatorError::no_backup(profile, NoBackupReason::Empty))
    });
    match outcome {
        Ok(stamp) => {
            let path = api.snapshot_data_dir(profile, &stamp);
            slog.latest_resolve()
                .path(path.display().to_string())
                .field("snapshot", json!(stamp.dir_name()))
                .field("duration_us", json!(elapsed_us(t0)))
                .emit_success();
            api.audit.log(
                Level::Debug,
                &format!("latest backup for {profile}: {}", path.display()),
            );
            Ok(path)
        }
        Err(e) => {
            fail(api, slog.latest_resolve(), t0, "latest backup", profile, &e);
            Err(e)
        }
    }
}

pub(crate) fn previous<E: FactsEmitter, A: AuditSink>(
    api: &BackupLocator<E, A>,
    profile: &str,
) -> Result<Option<PathBuf>, LocatorError> {
    let t0 = Instant::now();
    let ctx = audit_ctx(api, profile);
    let slog = StageLogger::new(&ctx);

    match scan(api.root(), profile) {
        Ok(stamps) => {
            let stamp = previous_of(&stamps);
            let path = stamp.map(|s| api.snapshot_data_dir(profile, &s));
            slog.previous_resolve()
                .field("snapshot", json!(stamp.map(|s| s.dir_name())))
                .field("path", json!(path.as_ref().map(|p| p.display().to_string())))
                .field("snapshot_count", json!(stamps.len()))
                .field("duration_us", json!(elapsed_us(t0)))
                .emit_success();
            Ok(path)
        }
        Err(e) => {
            fail(api, slog.previous_resolve(), t0, "previous backup", profile, &e);
            Err(e)
        }
    }
}

pub(crate) fn list<E: FactsEmitter, A: AuditSink>(
    api: &BackupLocator<E, A>,
    profile: &str,
) -> Result<Vec<SnapshotStamp>, LocatorError> {
    let t0 = Instant::now();
    let ctx = audit_ctx(api, profile);
    let slog = StageLogger::new(&ctx);

    match scan(api.root(), profile) {
        Ok(stamps) => {
            slog.snapshots_list()
                .path(api.backup_dir(profile).display().to_string())
                .field("snapshot_count", json!(stamps.len()))
                .field("duration_us", json!(elapsed_us(t0)))
                .emit_success();
            Ok(stamps)
        }
        Err(e) => {
            fail(api, slog.snapshots_list(), t0, "snapshot list", profile, &e);
            Err(e)
        }
    }
}
