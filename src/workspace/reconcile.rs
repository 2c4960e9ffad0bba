//! Existence-guarded symlink reconciliation.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use super::layout::{self, SymlinkIntent};
use crate::runtime::{Runtime, relative_symlink_path};

/// Make the web root expose the canonical contrib/custom trees and the
/// dependency cache through relative symlinks.
///
/// Pre-existing paths are never touched, whatever they are; a link is only
/// created where the link path is missing and the target directory exists.
/// Reruns are safe and retry exactly the still-missing links. Filesystem
/// errors abort the run; links created so far stay.
#[tracing::instrument(skip(runtime, root))]
pub fn reconcile<R: Runtime>(runtime: &R, root: &Path) -> Result<()> {
    let root = runtime
        .canonicalize(root)
        .with_context(|| format!("Failed to resolve project root {:?}", root))?;
    for intent in layout::plan(&root) {
        ensure_symlink(runtime, &intent)?;
    }
    Ok(())
}

fn ensure_symlink<R: Runtime>(runtime: &R, intent: &SymlinkIntent) -> Result<()> {
    // A prior symlink counts as existing even when its target is gone.
    if runtime.is_symlink(&intent.link) {
        match runtime.resolve_link(&intent.link) {
            Ok(existing) => debug!(
                "{:?} already links to {:?}, leaving it in place",
                intent.link, existing
            ),
            Err(_) => debug!("{:?} is already a symlink, leaving it in place", intent.link),
        }
        return Ok(());
    }
    if runtime.exists(&intent.link) {
        debug!("{:?} already exists, leaving it in place", intent.link);
        return Ok(());
    }
    if !runtime.exists(&intent.target) {
        debug!("{:?} does not exist, nothing to link", intent.target);
        return Ok(());
    }

    let original =
        relative_symlink_path(&intent.link, &intent.target).unwrap_or_else(|| intent.target.clone());
    runtime
        .symlink(&original, &intent.link)
        .with_context(|| format!("Failed to link {:?} to {:?}", intent.link, intent.target))?;
    debug!("Linked {:?} to {:?}", intent.link, original);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::test_root;
    use mockall::predicate::eq;
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_reconcile_creates_link_for_existing_canonical_tree() {
        let mut runtime = MockRuntime::new();
        let root = test_root();
        let contrib_modules = root.join("contrib").join("modules");

        runtime
            .expect_canonicalize()
            .returning(|path| Ok(path.to_path_buf()));
        runtime.expect_is_symlink().returning(|_| false);
        runtime
            .expect_exists()
            .returning(move |path| path == contrib_modules);
        runtime
            .expect_symlink()
            .with(
                eq(PathBuf::from("../contrib/modules")),
                eq(root.join("web").join("modules")),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        reconcile(&runtime, &test_root()).unwrap();
    }

    #[test]
    fn test_reconcile_first_registered_mapping_wins() {
        let mut runtime = MockRuntime::new();
        let root = test_root();
        let canonical: HashSet<PathBuf> = [
            root.join("contrib").join("modules"),
            root.join("custom").join("modules"),
        ]
        .into();
        let created: Arc<Mutex<HashSet<PathBuf>>> = Arc::new(Mutex::new(HashSet::new()));

        runtime
            .expect_canonicalize()
            .returning(|path| Ok(path.to_path_buf()));
        runtime.expect_is_symlink().returning({
            let created = created.clone();
            move |path| created.lock().unwrap().contains(path)
        });
        runtime.expect_resolve_link().returning({
            let root = root.clone();
            move |_| Ok(root.join("contrib").join("modules"))
        });
        runtime.expect_exists().returning({
            let created = created.clone();
            move |path| canonical.contains(path) || created.lock().unwrap().contains(path)
        });
        // Only the first intent on the shared mount creates a link; the
        // custom/modules intent finds it existing and skips.
        runtime
            .expect_symlink()
            .with(
                eq(PathBuf::from("../contrib/modules")),
                eq(root.join("web").join("modules")),
            )
            .times(1)
            .returning({
                let created = created.clone();
                move |_, link| {
                    created.lock().unwrap().insert(link.to_path_buf());
                    Ok(())
                }
            });

        reconcile(&runtime, &test_root()).unwrap();

        let created = created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert!(created.contains(&root.join("web").join("modules")));
    }

    #[test]
    fn test_reconcile_never_touches_existing_paths() {
        let mut runtime = MockRuntime::new();
        let root = test_root();
        let existing: HashSet<PathBuf> = [
            root.join("contrib").join("modules"),
            // a real directory is already mounted at the link path
            root.join("web").join("modules"),
        ]
        .into();

        runtime
            .expect_canonicalize()
            .returning(|path| Ok(path.to_path_buf()));
        runtime.expect_is_symlink().returning(|_| false);
        runtime
            .expect_exists()
            .returning(move |path| existing.contains(path));
        // expect_symlink is intentionally absent: any call would fail the test

        reconcile(&runtime, &test_root()).unwrap();
    }

    #[test]
    fn test_reconcile_skips_broken_prior_links() {
        let mut runtime = MockRuntime::new();
        let root = test_root();
        let contrib_modules = root.join("contrib").join("modules");
        let web_modules = root.join("web").join("modules");

        runtime
            .expect_canonicalize()
            .returning(|path| Ok(path.to_path_buf()));
        runtime
            .expect_is_symlink()
            .returning(move |path| path == web_modules);
        runtime
            .expect_resolve_link()
            .returning(|_| Err(anyhow::anyhow!("dangling")));
        runtime
            .expect_exists()
            .returning(move |path| path == contrib_modules);

        reconcile(&runtime, &test_root()).unwrap();
    }

    #[test]
    fn test_reconcile_creates_nothing_without_canonical_trees() {
        let mut runtime = MockRuntime::new();

        runtime
            .expect_canonicalize()
            .returning(|path| Ok(path.to_path_buf()));
        runtime.expect_is_symlink().returning(|_| false);
        runtime.expect_exists().returning(|_| false);

        reconcile(&runtime, &test_root()).unwrap();
    }

    #[test]
    fn test_reconcile_propagates_symlink_errors() {
        let mut runtime = MockRuntime::new();
        let root = test_root();
        let contrib_modules = root.join("contrib").join("modules");

        runtime
            .expect_canonicalize()
            .returning(|path| Ok(path.to_path_buf()));
        runtime.expect_is_symlink().returning(|_| false);
        runtime
            .expect_exists()
            .returning(move |path| path == contrib_modules);
        runtime
            .expect_symlink()
            .returning(|_, _| Err(anyhow::anyhow!("permission denied")));

        let result = reconcile(&runtime, &test_root());
        assert!(result.is_err());
    }

    #[test]
    fn test_reconcile_fails_on_unresolvable_root() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_canonicalize()
            .returning(|_| Err(anyhow::anyhow!("no such directory")));

        assert!(reconcile(&runtime, &test_root()).is_err());
    }
}
