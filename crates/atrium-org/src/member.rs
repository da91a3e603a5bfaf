//! Member domain models
//!
//! This module provides the member entity plus the patch value the
//! external directory store applies. A member owns their
//! [`Permissions`] matrix outright; the role template is only the
//! starting point, operators may customize it per member afterwards.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atrium_rbac::Permissions;

use crate::roles::AgencyRole;

/// Employment status of a member.
///
/// Only `Active` members count toward organizational statistics;
/// offboarded members are archived with `Terminated` status rather than
/// deleted, so the history of past reporting lines survives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Working and visible everywhere.
    Active,
    /// Temporarily deactivated.
    Inactive,
    /// On leave.
    OnLeave,
    /// Offboarded; kept for history.
    Terminated,
}

impl MemberStatus {
    /// Get the string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
            MemberStatus::OnLeave => "on_leave",
            MemberStatus::Terminated => "terminated",
        }
    }

    /// Parse status from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(MemberStatus::Active),
            "inactive" => Some(MemberStatus::Inactive),
            "on_leave" | "onleave" => Some(MemberStatus::OnLeave),
            "terminated" => Some(MemberStatus::Terminated),
            _ => None,
        }
    }

    /// Check whether the member is currently working.
    pub fn is_active(&self) -> bool {
        matches!(self, MemberStatus::Active)
    }
}

impl Default for MemberStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Department a member belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    /// Executive leadership.
    Leadership,
    /// Design and creative production.
    Creative,
    /// Engineering and development.
    Development,
    /// Marketing and growth.
    Marketing,
    /// Sales and accounts.
    Sales,
    /// Internal operations.
    Operations,
    /// Finance and billing.
    Finance,
}

impl Department {
    /// Get the string representation of the department.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Leadership => "leadership",
            Department::Creative => "creative",
            Department::Development => "development",
            Department::Marketing => "marketing",
            Department::Sales => "sales",
            Department::Operations => "operations",
            Department::Finance => "finance",
        }
    }

    /// Parse department from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "leadership" => Some(Department::Leadership),
            "creative" => Some(Department::Creative),
            "development" => Some(Department::Development),
            "marketing" => Some(Department::Marketing),
            "sales" => Some(Department::Sales),
            "operations" => Some(Department::Operations),
            "finance" => Some(Department::Finance),
            _ => None,
        }
    }

    /// Get all departments.
    pub fn all() -> Vec<Self> {
        vec![
            Department::Leadership,
            Department::Creative,
            Department::Development,
            Department::Marketing,
            Department::Sales,
            Department::Operations,
            Department::Finance,
        ]
    }
}

/// A member of the organization.
///
/// The `manager_id` reference is the single edge of the management
/// tree; the full graph view is derived from a member snapshot by
/// [`HierarchyGraph`](crate::HierarchyGraph). Structural edits to
/// `manager_id` must be validated through
/// [`validate_reassignment`](crate::validate_reassignment) before being
/// persisted.
///
/// # Examples
///
/// ```
/// use atrium_org::{AgencyRole, Department, Member};
///
/// let ceo = Member::new("Ada Reyes", "ada@atriumhq.dev", AgencyRole::Ceo, Department::Leadership);
/// let report = Member::new("Kai Ode", "kai@atriumhq.dev", AgencyRole::Director, Department::Creative)
///     .with_manager(ceo.id);
///
/// assert!(report.is_active());
/// assert_eq!(report.manager_id, Some(ceo.id));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique member ID
    pub id: Uuid,

    /// Full display name
    pub full_name: String,

    /// Work email address
    pub email: String,

    /// Role on the seniority ladder
    pub role: AgencyRole,

    /// Department the member belongs to
    pub department: Department,

    /// Direct manager; `None` for the organization root
    pub manager_id: Option<Uuid>,

    /// Employment status
    pub status: MemberStatus,

    /// The member's permission matrix (owned, never shared)
    pub policy: Permissions,

    /// When the member was onboarded
    pub joined_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,

    /// Custom metadata for extensibility
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Member {
    /// Creates a new active member.
    ///
    /// The member is created with:
    /// - A newly generated UUID v7 ID
    /// - Active status and no manager
    /// - The role's default permission template as their policy
    /// - Current timestamps for joined_at and updated_at
    ///
    /// # Arguments
    ///
    /// * `full_name` - The member's display name
    /// * `email` - Work email address
    /// * `role` - Role on the seniority ladder
    /// * `department` - Department the member belongs to
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        role: AgencyRole,
        department: Department,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            full_name: full_name.into(),
            email: email.into(),
            role,
            department,
            manager_id: None,
            status: MemberStatus::Active,
            policy: role.default_policy(),
            joined_at: now,
            updated_at: now,
            metadata: HashMap::new(),
        }
    }

    /// Set the member's direct manager.
    pub fn with_manager(mut self, manager_id: Uuid) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    /// Set the member's status.
    pub fn with_status(mut self, status: MemberStatus) -> Self {
        self.status = status;
        self
    }

    /// Replace the member's policy.
    pub fn with_policy(mut self, policy: Permissions) -> Self {
        self.policy = policy;
        self
    }

    /// Check whether the member is currently working.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Partial update applied to a member by the directory store.
///
/// Every field is optional; `manager_id` is doubly wrapped so a patch
/// can distinguish "leave unchanged" (`None`) from "clear the manager"
/// (`Some(None)`). Patches are produced by validated operations (e.g.
/// [`reassignment_patch`](crate::reassignment_patch)) and handed to
/// [`MemberDirectory::update_member`](crate::MemberDirectory::update_member).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberPatch {
    /// New manager reference; inner `None` clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<Option<Uuid>>,

    /// New role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AgencyRole>,

    /// New department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,

    /// New employment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,

    /// Replacement permission matrix (full overwrite, not a merge).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<Permissions>,
}

impl MemberPatch {
    /// A patch that changes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A patch that moves a member under a new manager.
    pub fn reassign_manager(manager_id: Uuid) -> Self {
        Self {
            manager_id: Some(Some(manager_id)),
            ..Self::default()
        }
    }

    /// A patch that replaces a member's policy.
    pub fn replace_policy(policy: Permissions) -> Self {
        Self {
            policy: Some(policy),
            ..Self::default()
        }
    }

    /// Check whether the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.manager_id.is_none()
            && self.role.is_none()
            && self.department.is_none()
            && self.status.is_none()
            && self.policy.is_none()
    }

    /// Apply the patch to a member record, bumping `updated_at`.
    pub fn apply(&self, member: &mut Member) {
        if let Some(manager_id) = self.manager_id {
            member.manager_id = manager_id;
        }
        if let Some(role) = self.role {
            member.role = role;
        }
        if let Some(department) = self.department {
            member.department = department;
        }
        if let Some(status) = self.status {
            member.status = status;
        }
        if let Some(ref policy) = self.policy {
            member.policy = policy.clone();
        }
        member.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_rbac::{CrudAction, ModuleKind};

    #[test]
    fn test_member_creation() {
        let member = Member::new(
            "Noa Lindqvist",
            "noa@atriumhq.dev",
            AgencyRole::Manager,
            Department::Operations,
        );

        assert_eq!(member.role, AgencyRole::Manager);
        assert_eq!(member.status, MemberStatus::Active);
        assert!(member.manager_id.is_none());
        assert_eq!(member.policy, AgencyRole::Manager.default_policy());
    }

    #[test]
    fn test_member_builders() {
        let manager_id = Uuid::now_v7();
        let member = Member::new(
            "Rin Sato",
            "rin@atriumhq.dev",
            AgencyRole::Junior,
            Department::Creative,
        )
        .with_manager(manager_id)
        .with_status(MemberStatus::OnLeave);

        assert_eq!(member.manager_id, Some(manager_id));
        assert!(!member.is_active());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            MemberStatus::Active,
            MemberStatus::Inactive,
            MemberStatus::OnLeave,
            MemberStatus::Terminated,
        ] {
            assert_eq!(MemberStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(MemberStatus::parse("retired"), None);
    }

    #[test]
    fn test_department_round_trip() {
        for department in Department::all() {
            assert_eq!(Department::parse(department.as_str()), Some(department));
        }
    }

    #[test]
    fn test_patch_reassign_manager() {
        let mut member = Member::new(
            "Io Marchetti",
            "io@atriumhq.dev",
            AgencyRole::Mid,
            Department::Development,
        );
        let new_manager = Uuid::now_v7();

        let patch = MemberPatch::reassign_manager(new_manager);
        assert!(!patch.is_empty());
        patch.apply(&mut member);

        assert_eq!(member.manager_id, Some(new_manager));
    }

    #[test]
    fn test_patch_clears_manager() {
        let mut member = Member::new(
            "Io Marchetti",
            "io@atriumhq.dev",
            AgencyRole::Mid,
            Department::Development,
        )
        .with_manager(Uuid::now_v7());

        let patch = MemberPatch {
            manager_id: Some(None),
            ..MemberPatch::default()
        };
        patch.apply(&mut member);

        assert!(member.manager_id.is_none());
    }

    #[test]
    fn test_patch_replaces_policy_wholesale() {
        let mut member = Member::new(
            "Sol Andrade",
            "sol@atriumhq.dev",
            AgencyRole::Senior,
            Department::Sales,
        );
        // Operator customization on top of the template.
        member.policy.tasks.delete = true;

        let patch = MemberPatch::replace_policy(AgencyRole::Senior.default_policy());
        patch.apply(&mut member);

        // Reset is an overwrite: the custom grant is gone.
        assert!(!member.policy.allows(ModuleKind::Tasks, CrudAction::Delete));
        assert_eq!(member.policy, AgencyRole::Senior.default_policy());
    }

    #[test]
    fn test_empty_patch_changes_nothing_but_timestamp() {
        let mut member = Member::new(
            "Vera Okoye",
            "vera@atriumhq.dev",
            AgencyRole::Vp,
            Department::Leadership,
        );
        let before = member.clone();

        MemberPatch::empty().apply(&mut member);

        assert_eq!(member.manager_id, before.manager_id);
        assert_eq!(member.role, before.role);
        assert_eq!(member.status, before.status);
        assert_eq!(member.policy, before.policy);
    }
}
