//! # Modules
//!
//! Defines the dashboard modules that permissions are granted on.
//! Every permission check names one module and one CRUD action.

use serde::{Deserialize, Serialize};

/// Dashboard modules of the Atrium platform.
///
/// Each module is an independent surface in the dashboard; a member's
/// [`Permissions`](crate::Permissions) carries one CRUD grant tuple per
/// module.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    /// Landing dashboard with aggregate widgets.
    Dashboard,
    /// Task boards and assignments.
    Tasks,
    /// Client records and engagement history.
    Clients,
    /// Shared calendar and scheduling.
    Calendar,
    /// Team roster and org chart.
    Team,
    /// Reporting and analytics views.
    Analytics,
    /// Cross-module tag management.
    Tags,
    /// Organization settings.
    Settings,
}

impl ModuleKind {
    /// Get the string representation of the module.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Dashboard => "dashboard",
            ModuleKind::Tasks => "tasks",
            ModuleKind::Clients => "clients",
            ModuleKind::Calendar => "calendar",
            ModuleKind::Team => "team",
            ModuleKind::Analytics => "analytics",
            ModuleKind::Tags => "tags",
            ModuleKind::Settings => "settings",
        }
    }

    /// Parse module from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(ModuleKind)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use atrium_rbac::ModuleKind;
    ///
    /// assert_eq!(ModuleKind::parse("tasks"), Some(ModuleKind::Tasks));
    /// assert_eq!(ModuleKind::parse("TEAM"), Some(ModuleKind::Team));
    /// assert_eq!(ModuleKind::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dashboard" => Some(ModuleKind::Dashboard),
            "tasks" => Some(ModuleKind::Tasks),
            "clients" => Some(ModuleKind::Clients),
            "calendar" => Some(ModuleKind::Calendar),
            "team" => Some(ModuleKind::Team),
            "analytics" => Some(ModuleKind::Analytics),
            "tags" => Some(ModuleKind::Tags),
            "settings" => Some(ModuleKind::Settings),
            _ => None,
        }
    }

    /// Get all modules, in dashboard navigation order.
    pub fn all() -> Vec<Self> {
        vec![
            ModuleKind::Dashboard,
            ModuleKind::Tasks,
            ModuleKind::Clients,
            ModuleKind::Calendar,
            ModuleKind::Team,
            ModuleKind::Analytics,
            ModuleKind::Tags,
            ModuleKind::Settings,
        ]
    }
}
