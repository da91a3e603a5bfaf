//! # Actions
//!
//! Defines the CRUD actions that can be performed inside a module.
//! Actions are deliberately a closed four-element set; module-level
//! grants are a boolean per action, not a free-form capability string.

use serde::{Deserialize, Serialize};

/// CRUD actions available within a dashboard module.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CrudAction {
    /// View module data.
    ///
    /// Grants access to open the module and read its records.
    View,

    /// Create new records.
    Create,

    /// Edit existing records.
    Edit,

    /// Delete records.
    ///
    /// The only destructive action; granted sparingly by the default
    /// role templates.
    Delete,
}

impl CrudAction {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            CrudAction::View => "view",
            CrudAction::Create => "create",
            CrudAction::Edit => "edit",
            CrudAction::Delete => "delete",
        }
    }

    /// Parse action from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, supports aliases)
    ///
    /// # Returns
    ///
    /// `Some(CrudAction)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use atrium_rbac::CrudAction;
    ///
    /// assert_eq!(CrudAction::parse("view"), Some(CrudAction::View));
    /// assert_eq!(CrudAction::parse("read"), Some(CrudAction::View)); // Alias
    /// assert_eq!(CrudAction::parse("update"), Some(CrudAction::Edit)); // Alias
    /// assert_eq!(CrudAction::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "view" | "read" | "get" => Some(CrudAction::View),
            "create" | "add" | "new" => Some(CrudAction::Create),
            "edit" | "update" | "write" | "modify" => Some(CrudAction::Edit),
            "delete" | "remove" | "destroy" => Some(CrudAction::Delete),
            _ => None,
        }
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            CrudAction::View,
            CrudAction::Create,
            CrudAction::Edit,
            CrudAction::Delete,
        ]
    }

    /// Check if this is a destructive action.
    pub fn is_destructive(&self) -> bool {
        matches!(self, CrudAction::Delete)
    }

    /// Check if this is a write action.
    ///
    /// Write actions modify or create records.
    pub fn is_write(&self) -> bool {
        !matches!(self, CrudAction::View)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parsing() {
        assert_eq!(CrudAction::parse("view"), Some(CrudAction::View));
        assert_eq!(CrudAction::parse("read"), Some(CrudAction::View));

        assert_eq!(CrudAction::parse("create"), Some(CrudAction::Create));
        assert_eq!(CrudAction::parse("add"), Some(CrudAction::Create));

        assert_eq!(CrudAction::parse("edit"), Some(CrudAction::Edit));
        assert_eq!(CrudAction::parse("update"), Some(CrudAction::Edit));

        assert_eq!(CrudAction::parse("delete"), Some(CrudAction::Delete));
        assert_eq!(CrudAction::parse("REMOVE"), Some(CrudAction::Delete));

        assert_eq!(CrudAction::parse("approve"), None);
    }

    #[test]
    fn test_action_as_str() {
        assert_eq!(CrudAction::View.as_str(), "view");
        assert_eq!(CrudAction::Create.as_str(), "create");
        assert_eq!(CrudAction::Edit.as_str(), "edit");
        assert_eq!(CrudAction::Delete.as_str(), "delete");
    }

    #[test]
    fn test_is_destructive() {
        assert!(CrudAction::Delete.is_destructive());
        assert!(!CrudAction::View.is_destructive());
        assert!(!CrudAction::Create.is_destructive());
        assert!(!CrudAction::Edit.is_destructive());
    }

    #[test]
    fn test_is_write() {
        assert!(CrudAction::Create.is_write());
        assert!(CrudAction::Edit.is_write());
        assert!(CrudAction::Delete.is_write());
        assert!(!CrudAction::View.is_write());
    }

    #[test]
    fn test_all_actions_count() {
        assert_eq!(CrudAction::all().len(), 4);
    }
}
