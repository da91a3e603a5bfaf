//! # Policies
//!
//! The full capability matrix owned by each member: one CRUD grant
//! tuple per dashboard module, the administrative grant set, and the
//! data scope applied to view queries.
//!
//! [`Permissions`] is a plain value type. Cloning it yields a fully
//! independent copy and `==` compares the whole tree, which is what the
//! permission editor uses to detect unsaved changes.

use serde::{Deserialize, Serialize};

use crate::actions::CrudAction;
use crate::admin::{AdminGrants, AdminPermission};
use crate::modules::ModuleKind;

/// The records a member's view queries may return.
///
/// Data scope is independent of the per-action CRUD flags: a member may
/// hold `view` on the tasks module but still only see their own tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DataScope {
    /// Every record in the organization.
    All,
    /// Records belonging to the member's team (their manager's subtree).
    Team,
    /// Only records the member owns.
    Own,
}

impl DataScope {
    /// Get the string representation of the scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataScope::All => "all",
            DataScope::Team => "team",
            DataScope::Own => "own",
        }
    }

    /// Parse scope from string representation.
    ///
    /// # Example
    ///
    /// ```
    /// use atrium_rbac::DataScope;
    ///
    /// assert_eq!(DataScope::parse("team"), Some(DataScope::Team));
    /// assert_eq!(DataScope::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(DataScope::All),
            "team" => Some(DataScope::Team),
            "own" => Some(DataScope::Own),
            _ => None,
        }
    }
}

impl Default for DataScope {
    fn default() -> Self {
        Self::Own
    }
}

/// CRUD grant tuple for a single module.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleGrants {
    /// View module data.
    pub view: bool,
    /// Create new records.
    pub create: bool,
    /// Edit existing records.
    pub edit: bool,
    /// Delete records.
    pub delete: bool,
}

impl ModuleGrants {
    /// No access to the module.
    pub fn none() -> Self {
        Self::default()
    }

    /// Full CRUD access.
    pub fn full() -> Self {
        Self {
            view: true,
            create: true,
            edit: true,
            delete: true,
        }
    }

    /// Read-only access.
    pub fn view_only() -> Self {
        Self {
            view: true,
            ..Self::default()
        }
    }

    /// View, create, and edit, but no delete.
    pub fn contribute() -> Self {
        Self {
            view: true,
            create: true,
            edit: true,
            delete: false,
        }
    }

    /// Check whether an action is granted.
    pub fn allows(&self, action: CrudAction) -> bool {
        match action {
            CrudAction::View => self.view,
            CrudAction::Create => self.create,
            CrudAction::Edit => self.edit,
            CrudAction::Delete => self.delete,
        }
    }

    /// Grant or revoke an action.
    pub fn set(&mut self, action: CrudAction, granted: bool) {
        match action {
            CrudAction::View => self.view = granted,
            CrudAction::Create => self.create = granted,
            CrudAction::Edit => self.edit = granted,
            CrudAction::Delete => self.delete = granted,
        }
    }
}

/// A member's full capability matrix.
///
/// Owned exclusively by its member and never shared; role templates
/// hand out fresh values, so mutating one member's policy can never
/// bleed into another's.
///
/// # Examples
///
/// ```
/// use atrium_rbac::{CrudAction, DataScope, ModuleGrants, ModuleKind, Permissions};
///
/// let mut policy = Permissions::none();
/// policy.clients = ModuleGrants::contribute();
///
/// assert!(policy.allows(ModuleKind::Clients, CrudAction::Create));
/// assert!(!policy.allows(ModuleKind::Clients, CrudAction::Delete));
/// assert_eq!(policy.data_scope, DataScope::Own);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Permissions {
    /// Landing dashboard grants.
    pub dashboard: ModuleGrants,
    /// Task board grants.
    pub tasks: ModuleGrants,
    /// Client record grants.
    pub clients: ModuleGrants,
    /// Calendar grants.
    pub calendar: ModuleGrants,
    /// Team roster grants.
    pub team: ModuleGrants,
    /// Analytics grants.
    pub analytics: ModuleGrants,
    /// Tag management grants.
    pub tags: ModuleGrants,
    /// Organization settings grants.
    pub settings: ModuleGrants,

    /// Administrative capability set.
    pub admin: AdminGrants,

    /// Which records view queries may return.
    #[serde(default)]
    pub data_scope: DataScope,
}

impl Permissions {
    /// A policy granting nothing, scoped to the member's own records.
    pub fn none() -> Self {
        Self::default()
    }

    /// Borrow the grant tuple for a module.
    pub fn module(&self, module: ModuleKind) -> &ModuleGrants {
        match module {
            ModuleKind::Dashboard => &self.dashboard,
            ModuleKind::Tasks => &self.tasks,
            ModuleKind::Clients => &self.clients,
            ModuleKind::Calendar => &self.calendar,
            ModuleKind::Team => &self.team,
            ModuleKind::Analytics => &self.analytics,
            ModuleKind::Tags => &self.tags,
            ModuleKind::Settings => &self.settings,
        }
    }

    /// Mutably borrow the grant tuple for a module.
    pub fn module_mut(&mut self, module: ModuleKind) -> &mut ModuleGrants {
        match module {
            ModuleKind::Dashboard => &mut self.dashboard,
            ModuleKind::Tasks => &mut self.tasks,
            ModuleKind::Clients => &mut self.clients,
            ModuleKind::Calendar => &mut self.calendar,
            ModuleKind::Team => &mut self.team,
            ModuleKind::Analytics => &mut self.analytics,
            ModuleKind::Tags => &mut self.tags,
            ModuleKind::Settings => &mut self.settings,
        }
    }

    /// Check whether an action is granted in a module.
    pub fn allows(&self, module: ModuleKind, action: CrudAction) -> bool {
        self.module(module).allows(action)
    }

    /// Check whether an administrative capability is granted.
    pub fn admin_allows(&self, key: AdminPermission) -> bool {
        self.admin.allows(key)
    }

    /// List the modules the member can open (view flag set).
    pub fn visible_modules(&self) -> Vec<ModuleKind> {
        ModuleKind::all()
            .into_iter()
            .filter(|m| self.module(*m).view)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdminPermission;

    #[test]
    fn test_data_scope_round_trip() {
        for scope in [DataScope::All, DataScope::Team, DataScope::Own] {
            assert_eq!(DataScope::parse(scope.as_str()), Some(scope));
        }
    }

    #[test]
    fn test_data_scope_default_is_own() {
        assert_eq!(DataScope::default(), DataScope::Own);
    }

    #[test]
    fn test_module_grants_constructors() {
        assert!(ModuleGrants::full().allows(CrudAction::Delete));
        assert!(!ModuleGrants::view_only().allows(CrudAction::Create));
        assert!(ModuleGrants::view_only().allows(CrudAction::View));
        assert!(ModuleGrants::contribute().allows(CrudAction::Edit));
        assert!(!ModuleGrants::contribute().allows(CrudAction::Delete));
        for action in CrudAction::all() {
            assert!(!ModuleGrants::none().allows(action));
        }
    }

    #[test]
    fn test_module_grants_set() {
        let mut grants = ModuleGrants::none();
        grants.set(CrudAction::View, true);
        grants.set(CrudAction::Edit, true);
        assert!(grants.allows(CrudAction::View));
        assert!(grants.allows(CrudAction::Edit));
        assert!(!grants.allows(CrudAction::Create));
    }

    #[test]
    fn test_permissions_module_lookup() {
        let mut policy = Permissions::none();
        policy.module_mut(ModuleKind::Analytics).view = true;

        assert!(policy.allows(ModuleKind::Analytics, CrudAction::View));
        assert!(!policy.allows(ModuleKind::Analytics, CrudAction::Edit));
        assert!(!policy.allows(ModuleKind::Dashboard, CrudAction::View));
    }

    #[test]
    fn test_permissions_admin_lookup() {
        let mut policy = Permissions::none();
        policy.admin.manage_billing = true;

        assert!(policy.admin_allows(AdminPermission::ManageBilling));
        assert!(!policy.admin_allows(AdminPermission::ManageUsers));
    }

    #[test]
    fn test_visible_modules() {
        let mut policy = Permissions::none();
        policy.dashboard = ModuleGrants::view_only();
        policy.tasks = ModuleGrants::full();

        assert_eq!(
            policy.visible_modules(),
            vec![ModuleKind::Dashboard, ModuleKind::Tasks]
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Permissions::none();
        original.tasks = ModuleGrants::full();

        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy.tasks.delete = false;
        copy.admin.manage_users = true;

        // The original is untouched by edits to the copy.
        assert!(original.tasks.delete);
        assert!(!original.admin.manage_users);
        assert_ne!(original, copy);
    }

    #[test]
    fn test_structural_equality() {
        let mut a = Permissions::none();
        let mut b = Permissions::none();
        assert_eq!(a, b);

        a.data_scope = DataScope::Team;
        assert_ne!(a, b);

        b.data_scope = DataScope::Team;
        assert_eq!(a, b);

        a.settings.edit = true;
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut policy = Permissions::none();
        policy.clients = ModuleGrants::contribute();
        policy.admin.view_reports = true;
        policy.data_scope = DataScope::All;

        let json = serde_json::to_string(&policy).unwrap();
        let back: Permissions = serde_json::from_str(&json).unwrap();
        assert_eq!(policy, back);
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(Permissions::none()).unwrap();
        assert!(json.get("dashboard").is_some());
        assert!(json.get("admin").is_some());
        assert_eq!(json["data_scope"], "own");
    }
}
