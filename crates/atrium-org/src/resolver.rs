//! Policy resolution
//!
//! Member-level authorization answers and role-template application.
//! Everything here reads the member's own [`Permissions`] matrix or the
//! role catalog; nothing mutates stored state. Applying or resetting a
//! policy goes through the directory store as a [`MemberPatch`], like
//! every other member mutation.

use atrium_rbac::{AdminPermission, CrudAction, ModuleKind, Permissions};

use crate::member::{Member, MemberPatch};
use crate::roles::AgencyRole;

/// Check whether a member may perform a CRUD action in a module.
///
/// Module and action are closed enums, so there is no invalid-key
/// failure mode; the answer is always a plain boolean read from the
/// member's policy.
///
/// # Examples
///
/// ```
/// use atrium_org::{has_module_permission, AgencyRole, Department, Member};
/// use atrium_rbac::{CrudAction, ModuleKind};
///
/// let intern = Member::new("Rin Sato", "rin@atriumhq.dev", AgencyRole::Intern, Department::Creative);
/// assert!(has_module_permission(&intern, ModuleKind::Tasks, CrudAction::View));
/// assert!(!has_module_permission(&intern, ModuleKind::Tasks, CrudAction::Edit));
/// ```
pub fn has_module_permission(member: &Member, module: ModuleKind, action: CrudAction) -> bool {
    member.policy.allows(module, action)
}

/// Check whether a member holds an administrative capability.
pub fn has_admin_permission(member: &Member, key: AdminPermission) -> bool {
    member.policy.admin_allows(key)
}

/// The default permission template for a role.
///
/// Returns a fresh value on every call; see
/// [`AgencyRole::default_policy`].
pub fn default_policy(role: AgencyRole) -> Permissions {
    role.default_policy()
}

/// Package a reset-to-role-baseline as a [`MemberPatch`].
///
/// Resetting is an explicit, idempotent overwrite of the member's whole
/// matrix; custom grants on top of the old policy do not survive.
pub fn reset_patch(role: AgencyRole) -> MemberPatch {
    MemberPatch::replace_policy(role.default_policy())
}

/// The modules a member can open, in dashboard navigation order.
///
/// This is the projection the dashboard shell renders its navigation
/// from.
pub fn accessible_modules(member: &Member) -> Vec<ModuleKind> {
    member.policy.visible_modules()
}
