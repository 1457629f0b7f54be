//! Role-based access control.
//!
//! Permissions are dotted `resource.action` strings resolved through a static
//! table. No storage is involved; the caller maps an authenticated user to a
//! [`Role`] and asks the role what it may do.

use serde::{Deserialize, Serialize};

/// Permission names used across the application.
pub mod permissions {
    pub const ASSETS_VIEW: &str = "assets.view";
    pub const ASSETS_MANAGE: &str = "assets.manage";
    pub const EMPLOYEES_VIEW: &str = "employees.view";
    pub const EMPLOYEES_MANAGE: &str = "employees.manage";
    pub const TICKETS_VIEW: &str = "tickets.view";
    pub const TICKETS_MANAGE: &str = "tickets.manage";
    pub const LICENSES_VIEW: &str = "licenses.view";
    pub const LICENSES_MANAGE: &str = "licenses.manage";
    pub const REPORTS_VIEW: &str = "reports.view";
    pub const USERS_MANAGE: &str = "users.manage";
    pub const SETTINGS_MANAGE: &str = "settings.manage";
}

use permissions::*;

static VIEWER_PERMISSIONS: &[&str] = &[ASSETS_VIEW, TICKETS_VIEW, REPORTS_VIEW];

static TECHNICIAN_PERMISSIONS: &[&str] = &[
    ASSETS_VIEW,
    ASSETS_MANAGE,
    TICKETS_VIEW,
    TICKETS_MANAGE,
    LICENSES_VIEW,
    REPORTS_VIEW,
];

static MANAGER_PERMISSIONS: &[&str] = &[
    ASSETS_VIEW,
    ASSETS_MANAGE,
    EMPLOYEES_VIEW,
    EMPLOYEES_MANAGE,
    TICKETS_VIEW,
    TICKETS_MANAGE,
    LICENSES_VIEW,
    LICENSES_MANAGE,
    REPORTS_VIEW,
];

static ADMIN_PERMISSIONS: &[&str] = &[
    ASSETS_VIEW,
    ASSETS_MANAGE,
    EMPLOYEES_VIEW,
    EMPLOYEES_MANAGE,
    TICKETS_VIEW,
    TICKETS_MANAGE,
    LICENSES_VIEW,
    LICENSES_MANAGE,
    REPORTS_VIEW,
    USERS_MANAGE,
    SETTINGS_MANAGE,
];

/// User roles, ordered from least to most privileged.
///
/// Permission sets are strictly nested: everything a Viewer may do, a
/// Technician may do, and so on up to Admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Viewer,
    Technician,
    Manager,
    Admin,
}

impl Role {
    /// Returns the database string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            Role::Viewer => "VIEWER",
            Role::Technician => "TECHNICIAN",
            Role::Manager => "MANAGER",
            Role::Admin => "ADMIN",
        }
    }

    /// Parses a role from its database string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "VIEWER" => Some(Role::Viewer),
            "TECHNICIAN" => Some(Role::Technician),
            "MANAGER" => Some(Role::Manager),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    /// The static permission table row for this role.
    pub const fn permissions(&self) -> &'static [&'static str] {
        match self {
            Role::Viewer => VIEWER_PERMISSIONS,
            Role::Technician => TECHNICIAN_PERMISSIONS,
            Role::Manager => MANAGER_PERMISSIONS,
            Role::Admin => ADMIN_PERMISSIONS,
        }
    }

    /// Whether this role holds the given permission. Admin holds everything,
    /// including permissions added after this table was written.
    pub fn has_permission(&self, permission: &str) -> bool {
        matches!(self, Role::Admin) || self.permissions().contains(&permission)
    }
}
