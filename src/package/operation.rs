//! Pending package operations as reported by the host before a commit.

use anyhow::{Result, bail};

/// A pending change to one package.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation<P> {
    Install {
        package: P,
    },
    Update {
        initial: P,
        target: P,
    },
    Uninstall {
        package: P,
    },
}

impl<P> Operation<P> {
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::Install { .. } => "install",
            Operation::Update { .. } => "update",
            Operation::Uninstall { .. } => "uninstall",
        }
    }

    /// The package record the operation results in: the new package for an
    /// install, the target package for an update. Any other kind is an error.
    pub fn resulting_package(&mut self) -> Result<&mut P> {
        match self {
            Operation::Install { package } => Ok(package),
            Operation::Update { target, .. } => Ok(target),
            other => bail!("Unknown operation: {}", other.kind()),
        }
    }
}
