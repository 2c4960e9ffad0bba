//! Host lifecycle hooks.
//!
//! Two entry points the host wires into its event pipeline:
//!
//! - [`redirect_patches`] runs once per batch before pending install/update
//!   operations commit. It must be subscribed ahead of any other handler that
//!   resolves patch manifests, so those handlers only ever see the rewritten
//!   manifest.
//! - [`post_update`] runs once after a full dependency-resolution cycle, not
//!   per package.

use anyhow::Result;
use log::info;
use std::path::Path;

use crate::package::{Operation, PackageRecord};
use crate::runtime::Runtime;
use crate::{patches, workspace};

/// Redirect meta-package patches on every pending install and update
/// operation in the batch. Emits one notice per batch, not per package.
#[tracing::instrument(skip(operations))]
pub fn redirect_patches<P: PackageRecord>(operations: &mut [Operation<P>]) -> Result<()> {
    info!(
        "Pointing {} patches to {} instead.",
        patches::META_PACKAGE,
        patches::TARGET_PACKAGE
    );
    for operation in operations.iter_mut() {
        match operation {
            Operation::Install { .. } | Operation::Update { .. } => {
                let package = operation.resulting_package()?;
                patches::apply_to(package);
            }
            _ => {}
        }
    }
    Ok(())
}

/// Reconcile the web root against the canonical trees, then bootstrap the
/// git-exclusion file, in that order.
#[tracing::instrument(skip(runtime, root))]
pub fn post_update<R: Runtime>(runtime: &R, root: &Path) -> Result<()> {
    workspace::reconcile(runtime, root)?;
    workspace::ensure_git_exclusions(runtime, root)
}
