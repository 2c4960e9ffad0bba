//! The package record interface exposed by the host.

use serde::{Deserialize, Serialize};

use super::ExtraMetadata;

/// Narrow view of a host package record.
pub trait PackageRecord {
    /// The namespaced package type, e.g. "drupal-module".
    fn package_type(&self) -> &str;

    /// The "vendor/name" pretty name.
    fn pretty_name(&self) -> &str;

    fn extra(&self) -> &ExtraMetadata;

    /// Metadata-mutation capability. Hosts whose records are immutable return
    /// `None`; metadata rewriting is then skipped for the package, silently.
    fn extra_mut(&mut self) -> Option<&mut ExtraMetadata>;
}

/// Plain owned package record, for embedders that do not have their own
/// record type and for tests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PackageData {
    #[serde(rename = "type")]
    pub package_type: String,
    pub name: String,
    #[serde(default)]
    pub extra: ExtraMetadata,
}

impl PackageData {
    pub fn new(package_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package_type: package_type.into(),
            name: name.into(),
            extra: ExtraMetadata::default(),
        }
    }

    pub fn with_extra(mut self, extra: ExtraMetadata) -> Self {
        self.extra = extra;
        self
    }
}

impl PackageRecord for PackageData {
    fn package_type(&self) -> &str {
        &self.package_type
    }

    fn pretty_name(&self) -> &str {
        &self.name
    }

    fn extra(&self) -> &ExtraMetadata {
        &self.extra
    }

    fn extra_mut(&mut self) -> Option<&mut ExtraMetadata> {
        Some(&mut self.extra)
    }
}
