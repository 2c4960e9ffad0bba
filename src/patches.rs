//! Patch-manifest redirection.
//!
//! Patches declared against the `drupal/core` meta-package never reach the
//! package that actually gets installed; they are redirected to
//! `drupal/drupal` instead. The rewrite is pure: it produces a new manifest
//! and leaves the input untouched, so callers decide where to store it.

use crate::package::{ExtraMetadata, PackageRecord};

/// Meta-package the release train declares patches against.
pub const META_PACKAGE: &str = "drupal/core";

/// The package those patches are applied to.
pub const TARGET_PACKAGE: &str = "drupal/drupal";

/// Whether the manifest declares any patches against the meta-package.
pub fn needs_redirect(extra: &ExtraMetadata) -> bool {
    extra
        .patches_for(META_PACKAGE)
        .is_some_and(|patches| !patches.is_empty())
}

/// Rewrite a patch manifest, redirecting meta-package patches to the target
/// package. Meta patches go in front of any existing target patches; existing
/// entries are preserved and appended after, not overwritten and not
/// deduplicated. Without meta-package patches the result is structurally
/// equal to the input. Idempotent.
pub fn redirect(extra: &ExtraMetadata) -> ExtraMetadata {
    let mut rewritten = extra.clone();
    let Some(patches) = rewritten.patches.as_mut() else {
        return rewritten;
    };
    match patches.remove(META_PACKAGE) {
        Some(core_patches) if !core_patches.is_empty() => {
            let mut merged = core_patches;
            merged.extend(patches.remove(TARGET_PACKAGE).unwrap_or_default());
            patches.insert(TARGET_PACKAGE.to_string(), merged);
        }
        Some(empty) => {
            // An empty meta entry is not a redirect request; keep the manifest untouched.
            patches.insert(META_PACKAGE.to_string(), empty);
        }
        None => {}
    }
    rewritten
}

/// Apply the redirect to a package record through its metadata-mutation
/// capability. Returns whether the record was rewritten; packages without the
/// capability are skipped, silently.
pub fn apply_to<P: PackageRecord>(package: &mut P) -> bool {
    if package.extra_mut().is_none() {
        return false;
    }
    if !needs_redirect(package.extra()) {
        return false;
    }
    let rewritten = redirect(package.extra());
    match package.extra_mut() {
        Some(extra) => {
            *extra = rewritten;
            true
        }
        None => false,
    }
}
