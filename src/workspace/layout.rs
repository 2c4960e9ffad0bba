//! The fixed directory layout of a split workspace.

use std::path::{Path, PathBuf};

pub const WEB_ROOT: &str = "web";
pub const VENDOR_DIR: &str = "vendor";

/// Extension categories, in registration order.
pub const CATEGORIES: [&str; 2] = ["contrib", "custom"];

/// One extension kind and the web-root mount it is exposed under.
pub struct KindMapping {
    pub kind: &'static str,
    pub web_mount: &'static str,
}

/// Extension kinds, in registration order. modules, profiles and themes share
/// the `modules` mount; drush keeps a mount of its own.
pub const EXTENSION_KINDS: [KindMapping; 5] = [
    KindMapping {
        kind: "modules",
        web_mount: "modules",
    },
    KindMapping {
        kind: "profiles",
        web_mount: "modules",
    },
    KindMapping {
        kind: "themes",
        web_mount: "modules",
    },
    KindMapping {
        kind: "libraries",
        web_mount: "libraries",
    },
    KindMapping {
        kind: "drush",
        web_mount: "drush",
    },
];

/// A link the reconciler wants to exist: a symlink at `link` pointing to the
/// real directory at `target`. Computed fresh on every run, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SymlinkIntent {
    pub target: PathBuf,
    pub link: PathBuf,
}

/// All link intents for a project root, in registration order: both
/// categories across every extension kind, then the dependency cache. Several
/// intents share a mount path; the first one whose target exists wins and
/// reconciliation skips the rest.
pub fn plan(root: &Path) -> Vec<SymlinkIntent> {
    let web_root = root.join(WEB_ROOT);
    let mut intents = Vec::with_capacity(CATEGORIES.len() * EXTENSION_KINDS.len() + 1);
    for category in CATEGORIES {
        for mapping in &EXTENSION_KINDS {
            intents.push(SymlinkIntent {
                target: root.join(category).join(mapping.kind),
                link: web_root.join(mapping.web_mount),
            });
        }
    }
    intents.push(SymlinkIntent {
        target: root.join(VENDOR_DIR),
        link: web_root.join(VENDOR_DIR),
    });
    intents
}
