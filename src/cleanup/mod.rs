//! The cleanup run: select, name, link, track, trash.
//!
//! Processing is sequential: one dirty file at a time, then one destination
//! at a time in declaration order. Per-file problems become
//! [`Event::Error`]s and never stop the run; only an unreadable source
//! directory does.
mod context;
mod placed;

pub use context::Context;
pub use placed::PlacedSet;

use std::path::PathBuf;

use crate::error::ScanError;
use crate::naming::{Candidate, Verdict};
use crate::report::{ErrorCause, Event};
use crate::resources::{LinkOutcome, LinkResource, TargetState};
use crate::selector::{self, DirtyFile};

/// Counters and the placed set of a finished run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Dirty files found in the source directory.
    pub selected: usize,
    /// Files whose clean name was refused.
    pub rejected: usize,
    /// Link attempts the OS refused.
    pub failures: usize,
    /// Originals placed in every destination by this run.
    pub placed: PlacedSet,
    /// Originals handed to the trash (zero unless the call succeeded).
    pub trashed: usize,
    /// `true` when the trash call was made and failed.
    pub trash_failed: bool,
}

/// Run a cleanup job.
///
/// # Errors
///
/// Returns [`ScanError`] if the source directory cannot be listed; nothing
/// has been touched in that case.
pub fn run(ctx: &Context) -> Result<RunSummary, ScanError> {
    let config = &ctx.config;
    ctx.log
        .debug(&format!("scanning {}", config.source().display()));
    let dirty = selector::select(&*ctx.fs_ops, config.source())?;
    ctx.log.debug(&format!("{} dirty file(s)", dirty.len()));

    let mut summary = RunSummary {
        selected: dirty.len(),
        ..RunSummary::default()
    };
    for file in &dirty {
        process_file(ctx, file, &mut summary);
    }

    if config.trash_originals() {
        if summary.failures > 0 {
            ctx.log.warn(&format!(
                "{} link(s) failed; those originals stay in place",
                summary.failures
            ));
        }
        trash_placed(ctx, &mut summary);
    }
    Ok(summary)
}

fn process_file(ctx: &Context, file: &DirtyFile, summary: &mut RunSummary) {
    let config = &ctx.config;
    let candidate = Candidate::new(&file.name);

    if let Verdict::Rejected(rejection) = candidate.verdict() {
        summary.rejected += 1;
        ctx.reporter.report(&Event::Error {
            source: file.path.clone(),
            target: file.path.with_file_name(candidate.cleaned()),
            cause: ErrorCause::Rejected(rejection.clone()),
        });
        return;
    }
    if config.report_only_failures() {
        return;
    }

    ctx.reporter.report(&Event::Source {
        path: file.path.clone(),
    });
    for destination in config.destinations() {
        let resource =
            LinkResource::plan(&file.path, destination, candidate.cleaned(), config.mode());

        if config.dry_run() {
            ctx.reporter.report(&preview_event(&resource, ctx));
            continue;
        }

        ctx.log.debug(&format!(
            "{} {}",
            resource.mode.verb(),
            resource.description()
        ));
        let outcome = resource.apply(&*ctx.fs_ops);
        if outcome.is_failure() {
            summary.failures += 1;
        }
        summary.placed.record(&file.path, &outcome);
        ctx.reporter.report(&outcome_event(resource, outcome));
    }
}

fn preview_event(resource: &LinkResource, ctx: &Context) -> Event {
    let source = resource.source.clone();
    let target = resource.target.clone();
    match resource.current_state(&*ctx.fs_ops) {
        TargetState::Vacant => Event::LinkPreview { source, target },
        TargetState::Occupied => Event::Homonym { source, target },
    }
}

fn outcome_event(resource: LinkResource, outcome: LinkOutcome) -> Event {
    let LinkResource { source, target, .. } = resource;
    match outcome {
        LinkOutcome::Linked => Event::Linked { source, target },
        LinkOutcome::AlreadyExists => Event::Homonym { source, target },
        LinkOutcome::Failed(failure) => Event::Error {
            source,
            target,
            cause: ErrorCause::Link(failure),
        },
    }
}

fn trash_placed(ctx: &Context, summary: &mut RunSummary) {
    if summary.placed.is_empty() {
        ctx.log.debug("nothing to trash");
        return;
    }
    let paths: Vec<PathBuf> = summary.placed.paths().to_vec();
    for path in &paths {
        ctx.reporter.report(&Event::Trashing { path: path.clone() });
    }
    match ctx.trasher.trash(&paths) {
        Ok(output) => {
            summary.trashed = paths.len();
            ctx.reporter.report(&Event::Trashed { paths, output });
        }
        Err(e) => {
            summary.trash_failed = true;
            ctx.reporter.report(&Event::TrashFailed {
                paths,
                cause: e.to_string(),
            });
        }
    }
}
