//! Install-path resolution for `drupal-*` extension packages.
//!
//! Maps a package type and pretty name to the directory the extension is
//! placed in. Packages outside the `drupal-` namespace, the reserved
//! `drupal-core` type, and unrecognized subtypes are declined so the host
//! falls back to its own default install path.

use std::path::PathBuf;

/// Namespace prefix identifying extension package types.
pub const TYPE_PREFIX: &str = "drupal-";

/// The core framework package type is reserved and never handled here.
pub const CORE_PACKAGE_TYPE: &str = "drupal-core";

/// Whether this resolver handles the given package type at all.
pub fn supports(package_type: &str) -> bool {
    package_type.starts_with(TYPE_PREFIX) && package_type != CORE_PACKAGE_TYPE
}

/// Compute the install directory for an extension package, relative to the
/// project root. Returns `None` when the package is not handled here and the
/// host default applies. Never fails: unrecognized input is a fallback, not
/// an error.
pub fn resolve_install_path(package_type: &str, pretty_name: &str) -> Option<PathBuf> {
    if !supports(package_type) {
        return None;
    }
    let subtype = &package_type[TYPE_PREFIX.len()..];
    // Pretty names are "vendor/name"; the extension's bare name is the part
    // after the separator.
    let (_, name) = pretty_name.split_once('/')?;
    let path = match subtype {
        "module" => format!("contrib/modules/{name}"),
        "profile" => format!("contrib/profiles/{name}"),
        "theme" => format!("contrib/themes/{name}"),
        "drush" => format!("contrib/drush/Commands/{name}"),
        "custom-module" => format!("custom/modules/{name}"),
        "custom-theme" => format!("custom/themes/{name}"),
        _ => return None,
    };
    Some(PathBuf::from(path))
}
