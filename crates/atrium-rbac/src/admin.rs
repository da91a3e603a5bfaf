//! # Admin Capabilities
//!
//! Organization-level administrative grants. These sit outside the
//! per-module CRUD matrix: they gate operator features (user and role
//! management, reporting, export, billing) rather than record access.

use serde::{Deserialize, Serialize};

/// Administrative capabilities that can be granted to a member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdminPermission {
    /// Invite, deactivate, and reassign members.
    ManageUsers,
    /// Change member roles.
    ManageRoles,
    /// Edit member permission matrices directly.
    ManagePermissions,
    /// View organization-wide reports.
    ViewReports,
    /// Export organization data.
    ExportData,
    /// Manage subscription and billing.
    ManageBilling,
}

impl AdminPermission {
    /// Get the string representation of the capability.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminPermission::ManageUsers => "manage_users",
            AdminPermission::ManageRoles => "manage_roles",
            AdminPermission::ManagePermissions => "manage_permissions",
            AdminPermission::ViewReports => "view_reports",
            AdminPermission::ExportData => "export_data",
            AdminPermission::ManageBilling => "manage_billing",
        }
    }

    /// Parse capability from string representation.
    ///
    /// # Example
    ///
    /// ```
    /// use atrium_rbac::AdminPermission;
    ///
    /// assert_eq!(
    ///     AdminPermission::parse("manage_users"),
    ///     Some(AdminPermission::ManageUsers)
    /// );
    /// assert_eq!(AdminPermission::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "manage_users" => Some(AdminPermission::ManageUsers),
            "manage_roles" => Some(AdminPermission::ManageRoles),
            "manage_permissions" => Some(AdminPermission::ManagePermissions),
            "view_reports" => Some(AdminPermission::ViewReports),
            "export_data" => Some(AdminPermission::ExportData),
            "manage_billing" => Some(AdminPermission::ManageBilling),
            _ => None,
        }
    }

    /// Get all admin capabilities.
    pub fn all() -> Vec<Self> {
        vec![
            AdminPermission::ManageUsers,
            AdminPermission::ManageRoles,
            AdminPermission::ManagePermissions,
            AdminPermission::ViewReports,
            AdminPermission::ExportData,
            AdminPermission::ManageBilling,
        ]
    }
}

/// The six independent administrative grants held by a member.
///
/// Unlike module grants these are not CRUD-shaped; each flag stands
/// alone and none implies another.
///
/// # Examples
///
/// ```
/// use atrium_rbac::{AdminGrants, AdminPermission};
///
/// let mut grants = AdminGrants::none();
/// grants.view_reports = true;
///
/// assert!(grants.allows(AdminPermission::ViewReports));
/// assert!(!grants.allows(AdminPermission::ManageBilling));
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminGrants {
    /// Invite, deactivate, and reassign members.
    pub manage_users: bool,
    /// Change member roles.
    pub manage_roles: bool,
    /// Edit member permission matrices directly.
    pub manage_permissions: bool,
    /// View organization-wide reports.
    pub view_reports: bool,
    /// Export organization data.
    pub export_data: bool,
    /// Manage subscription and billing.
    pub manage_billing: bool,
}

impl AdminGrants {
    /// No administrative capabilities.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every administrative capability.
    pub fn all() -> Self {
        Self {
            manage_users: true,
            manage_roles: true,
            manage_permissions: true,
            view_reports: true,
            export_data: true,
            manage_billing: true,
        }
    }

    /// Check whether a capability is granted.
    pub fn allows(&self, key: AdminPermission) -> bool {
        match key {
            AdminPermission::ManageUsers => self.manage_users,
            AdminPermission::ManageRoles => self.manage_roles,
            AdminPermission::ManagePermissions => self.manage_permissions,
            AdminPermission::ViewReports => self.view_reports,
            AdminPermission::ExportData => self.export_data,
            AdminPermission::ManageBilling => self.manage_billing,
        }
    }

    /// Grant or revoke a capability.
    pub fn set(&mut self, key: AdminPermission, granted: bool) {
        match key {
            AdminPermission::ManageUsers => self.manage_users = granted,
            AdminPermission::ManageRoles => self.manage_roles = granted,
            AdminPermission::ManagePermissions => self.manage_permissions = granted,
            AdminPermission::ViewReports => self.view_reports = granted,
            AdminPermission::ExportData => self.export_data = granted,
            AdminPermission::ManageBilling => self.manage_billing = granted,
        }
    }

    /// List the capabilities currently granted.
    pub fn granted(&self) -> Vec<AdminPermission> {
        AdminPermission::all()
            .into_iter()
            .filter(|key| self.allows(*key))
            .collect()
    }
}
