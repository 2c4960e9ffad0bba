//! Extra metadata carried by a package record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single patch entry. Descriptors are host-defined JSON values; they are
/// carried verbatim and never interpreted or deduplicated here.
pub type PatchDescriptor = serde_json::Value;

/// The `extra` section of a package record.
///
/// The patch manifest is an explicit optional field so that "no manifest" and
/// "a manifest with no entries" stay distinguishable. Every other extra key
/// the host put there is preserved verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ExtraMetadata {
    /// Patch sequences keyed by the name of the package they apply to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patches: Option<BTreeMap<String, Vec<PatchDescriptor>>>,

    /// All remaining extra fields, passed through untouched.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl ExtraMetadata {
    /// The patch sequence declared against `package`, if any.
    pub fn patches_for(&self, package: &str) -> Option<&[PatchDescriptor]> {
        self.patches
            .as_ref()
            .and_then(|patches| patches.get(package))
            .map(Vec::as_slice)
    }
}
