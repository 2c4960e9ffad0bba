//! One-time git-exclusion bootstrap for the web root.
//!
//! The reconciler's links live inside the web root's working tree; this
//! appends an exclusion block to `web/.git/info/exclude` so they never show
//! up as untracked content. The block is guarded by a sentinel line, which
//! makes the append idempotent across reruns. Existing file content is never
//! overwritten.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use super::layout::WEB_ROOT;
use crate::runtime::Runtime;

/// Sentinel line marking the exclusion block as already appended.
pub const EXCLUDE_SENTINEL: &str = "### BEGIN ### Added by drci";

/// Location of the exclusion file, relative to the web root.
const EXCLUDE_FILE: &str = ".git/info/exclude";

fn exclude_block() -> String {
    format!("{EXCLUDE_SENTINEL}\n/modules\n/libraries\n/drush\n/vendor\n### END ### Added by drci\n")
}

#[tracing::instrument(skip(runtime, root))]
pub fn ensure_git_exclusions<R: Runtime>(runtime: &R, root: &Path) -> Result<()> {
    let exclude_file = root.join(WEB_ROOT).join(EXCLUDE_FILE);

    let existing = if runtime.exists(&exclude_file) {
        runtime
            .read_to_string(&exclude_file)
            .with_context(|| format!("Failed to read {:?}", exclude_file))?
    } else {
        String::new()
    };
    if existing.lines().any(|line| line == EXCLUDE_SENTINEL) {
        debug!("{:?} already carries the exclusion block", exclude_file);
        return Ok(());
    }

    let mut block = String::new();
    if !existing.is_empty() && !existing.ends_with('\n') {
        block.push('\n');
    }
    block.push_str(&exclude_block());

    runtime
        .append(&exclude_file, block.as_bytes())
        .with_context(|| format!("Failed to append exclusions to {:?}", exclude_file))?;
    debug!("Appended exclusion block to {:?}", exclude_file);
    Ok(())
}
