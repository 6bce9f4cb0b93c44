//! Directory roles
//!
//! A role is the logical name for a directory's purpose inside an
//! installation tree. The set is closed: adding a role means adding a
//! variant here, and the compiler will point at every match that needs
//! updating.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Logical directory roles inside an installation tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryRole {
    /// Application configuration (`app/etc`)
    Config,
    /// Runtime state: caches, logs, sessions (`var`)
    Var,
    /// User-uploaded media (`pub/media`)
    Media,
    /// Generated static view files (`pub/static`)
    StaticView,
}

impl DirectoryRole {
    /// Default location of this role relative to the installation base
    pub fn default_location(&self) -> &'static Path {
        match self {
            DirectoryRole::Config => Path::new("app/etc"),
            DirectoryRole::Var => Path::new("var"),
            DirectoryRole::Media => Path::new("pub/media"),
            DirectoryRole::StaticView => Path::new("pub/static"),
        }
    }
}

impl std::fmt::Display for DirectoryRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DirectoryRole::Config => "config",
            DirectoryRole::Var => "var",
            DirectoryRole::Media => "media",
            DirectoryRole::StaticView => "static_view",
        };
        write!(f, "{}", name)
    }
}

/// Roles that must be writable while the product is being installed,
/// in the fixed order reports use
pub fn installation_roles() -> [DirectoryRole; 4] {
    [
        DirectoryRole::Config,
        DirectoryRole::Var,
        DirectoryRole::Media,
        DirectoryRole::StaticView,
    ]
}

/// Roles that must stay writable once the application is running
pub fn application_roles() -> [DirectoryRole; 1] {
    [DirectoryRole::Config]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installation_roles_order_is_fixed() {
        let roles = installation_roles();
        assert_eq!(roles[0], DirectoryRole::Config);
        assert_eq!(roles[1], DirectoryRole::Var);
        assert_eq!(roles[2], DirectoryRole::Media);
        assert_eq!(roles[3], DirectoryRole::StaticView);
    }

    #[test]
    fn test_application_roles_is_config_only() {
        assert_eq!(application_roles(), [DirectoryRole::Config]);
    }

    #[test]
    fn test_application_roles_subset_of_installation() {
        let install = installation_roles();
        for role in application_roles() {
            assert!(install.contains(&role));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(DirectoryRole::StaticView.to_string(), "static_view");
        assert_eq!(DirectoryRole::Config.to_string(), "config");
    }
}
