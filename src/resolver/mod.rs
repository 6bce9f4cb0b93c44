//! Path resolution
//!
//! Maps a [`DirectoryRole`] to an absolute filesystem path. The checker
//! only sees the trait, so tests and alternative layouts can plug in
//! their own resolver.

use crate::error::Result;
use crate::roles::DirectoryRole;
use std::path::{Path, PathBuf};

/// Resolves a directory role to a concrete filesystem path
pub trait PathResolver {
    fn resolve(&self, role: DirectoryRole) -> Result<PathBuf>;
}

/// Resolver that joins each role's default location onto an installation
/// base directory
#[derive(Debug, Clone)]
pub struct BasePathResolver {
    base: PathBuf,
}

impl BasePathResolver {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Base rooted at the current working directory
    pub fn from_current_dir() -> Result<Self> {
        let base = std::env::current_dir()?;
        Ok(Self::new(base))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl PathResolver for BasePathResolver {
    fn resolve(&self, role: DirectoryRole) -> Result<PathBuf> {
        Ok(self.base.join(role.default_location()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_default_locations() {
        let resolver = BasePathResolver::new("/opt/shop");
        assert_eq!(
            resolver.resolve(DirectoryRole::Config).unwrap(),
            PathBuf::from("/opt/shop/app/etc")
        );
        assert_eq!(
            resolver.resolve(DirectoryRole::Var).unwrap(),
            PathBuf::from("/opt/shop/var")
        );
        assert_eq!(
            resolver.resolve(DirectoryRole::Media).unwrap(),
            PathBuf::from("/opt/shop/pub/media")
        );
        assert_eq!(
            resolver.resolve(DirectoryRole::StaticView).unwrap(),
            PathBuf::from("/opt/shop/pub/static")
        );
    }
}
