//! Package records and the metadata they carry.

mod extra;
mod operation;
mod record;

pub use extra::{ExtraMetadata, PatchDescriptor};
pub use operation::Operation;
pub use record::{PackageData, PackageRecord};
