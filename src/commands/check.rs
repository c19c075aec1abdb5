//! Command: show how names would be cleaned.
use anyhow::Result;

use crate::cli::CheckOpts;
use crate::logging::{FileStatus, Log};
use crate::naming::{Candidate, Verdict};

/// Normalize and validate every name in `opts`, logging one verdict each.
///
/// Never touches the filesystem.
///
/// # Errors
///
/// Returns an error if at least one name is rejected.
pub fn run(opts: &CheckOpts, log: &dyn Log) -> Result<()> {
    let mut rejected = 0usize;
    for name in &opts.names {
        let candidate = Candidate::new(name);
        match candidate.verdict() {
            Verdict::Accepted => {
                log.info(&format!("{name}\n\t-> {}", candidate.cleaned()));
                log.record_file(candidate.cleaned(), FileStatus::Preview, None);
            }
            Verdict::Rejected(rejection) => {
                rejected += 1;
                log.error(&format!("{name}\n\t{rejection}"));
                log.record_file(name, FileStatus::Rejected, Some(&rejection.to_string()));
            }
        }
    }
    if rejected > 0 {
        anyhow::bail!("{rejected} name(s) cannot be cleaned");
    }
    Ok(())
}
