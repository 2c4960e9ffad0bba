//! Install-time shim around the host's installer extension point.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::package::PackageRecord;
use crate::{patches, resolver};

/// The host side of package installation: the default install-path logic and
/// the actual file placement (download, extraction, writing).
pub trait HostInstaller<P: PackageRecord> {
    /// Default install path for packages this shim declines.
    fn default_install_path(&self, package: &P) -> PathBuf;

    /// Place the package's files at the given install path.
    fn place(&mut self, package: &P, install_path: &Path) -> Result<()>;
}

/// Installer shim for `drupal-*` extension packages.
///
/// Computes non-default install directories and rewrites the patch manifest
/// before handing the actual file placement back to the host.
pub struct ExtensionInstaller<H> {
    host: H,
}

impl<H> ExtensionInstaller<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Whether this installer takes responsibility for a package type.
    pub fn supports(&self, package_type: &str) -> bool {
        resolver::supports(package_type)
    }

    /// The directory the package is installed to: the resolver's answer, or
    /// the host default when the resolver declines.
    pub fn install_path<P: PackageRecord>(&self, package: &P) -> PathBuf
    where
        H: HostInstaller<P>,
    {
        resolver::resolve_install_path(package.package_type(), package.pretty_name())
            .unwrap_or_else(|| self.host.default_install_path(package))
    }

    /// Install one package: redirect its meta-package patches (when the
    /// record supports metadata mutation), then delegate placement.
    #[tracing::instrument(skip(self, package))]
    pub fn install<P: PackageRecord>(&mut self, package: &mut P) -> Result<()>
    where
        H: HostInstaller<P>,
    {
        patches::apply_to(package);
        let install_path = self.install_path(package);
        self.host.place(package, &install_path)
    }
}
