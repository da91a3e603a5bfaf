//! Error types for hierarchy operations
//!
//! All structural failures are recoverable, caller-facing values: the
//! dashboard surfaces them as rejection messages and performs no
//! mutation. Nothing in this crate panics on bad org data.

use thiserror::Error;
use uuid::Uuid;

use crate::roles::AgencyRole;

/// Structural errors raised by hierarchy construction, traversal, and
/// reassignment validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyError {
    /// No CEO-ranked member in the snapshot
    #[error("Organization has no CEO-ranked member")]
    MissingRoot,

    /// More than one top-level member where a single root is required
    #[error("Organization has {0} top-level members, expected exactly one")]
    AmbiguousRoot(usize),

    /// An id does not resolve to a member in the snapshot
    #[error("Unknown member: {0}")]
    UnknownMember(Uuid),

    /// A manager chain loops back on itself
    #[error("Management chain contains a cycle through {0}")]
    CycleDetected(Uuid),

    /// A member was proposed as their own manager
    #[error("A member cannot be their own manager")]
    SelfAssignment,

    /// The proposed manager sits inside the member's own subtree
    #[error("Moving {member} under {proposed_manager} would create a reporting cycle")]
    CycleWouldForm {
        /// The member being moved.
        member: Uuid,
        /// The proposed manager, currently a descendant of `member`.
        proposed_manager: Uuid,
    },

    /// The proposed manager is not strictly senior by rank
    #[error("Proposed manager ({manager_role}) is not senior to member ({member_role})")]
    ManagerNotSenior {
        /// Role of the proposed manager.
        manager_role: AgencyRole,
        /// Role of the member being moved.
        member_role: AgencyRole,
    },
}

/// Result type for hierarchy operations.
pub type OrgResult<T> = Result<T, HierarchyError>;

impl HierarchyError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            HierarchyError::MissingRoot => "MISSING_ROOT",
            HierarchyError::AmbiguousRoot(_) => "AMBIGUOUS_ROOT",
            HierarchyError::UnknownMember(_) => "UNKNOWN_MEMBER",
            HierarchyError::CycleDetected(_) => "CYCLE_DETECTED",
            HierarchyError::SelfAssignment => "SELF_ASSIGNMENT",
            HierarchyError::CycleWouldForm { .. } => "CYCLE_WOULD_FORM",
            HierarchyError::ManagerNotSenior { .. } => "MANAGER_NOT_SENIOR",
        }
    }

    /// Check whether this error rejects a proposed structural edit (as
    /// opposed to flagging a defect in the stored data itself).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            HierarchyError::SelfAssignment
                | HierarchyError::CycleWouldForm { .. }
                | HierarchyError::ManagerNotSenior { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            HierarchyError::MissingRoot.error_code(),
            HierarchyError::AmbiguousRoot(2).error_code(),
            HierarchyError::UnknownMember(Uuid::nil()).error_code(),
            HierarchyError::CycleDetected(Uuid::nil()).error_code(),
            HierarchyError::SelfAssignment.error_code(),
            HierarchyError::CycleWouldForm {
                member: Uuid::nil(),
                proposed_manager: Uuid::nil(),
            }
            .error_code(),
            HierarchyError::ManagerNotSenior {
                manager_role: AgencyRole::Manager,
                member_role: AgencyRole::Director,
            }
            .error_code(),
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_rejection_classification() {
        assert!(HierarchyError::SelfAssignment.is_rejection());
        assert!(!HierarchyError::MissingRoot.is_rejection());
        assert!(!HierarchyError::CycleDetected(Uuid::nil()).is_rejection());
    }

    #[test]
    fn test_display_names_roles() {
        let err = HierarchyError::ManagerNotSenior {
            manager_role: AgencyRole::Manager,
            member_role: AgencyRole::Director,
        };
        assert_eq!(
            err.to_string(),
            "Proposed manager (manager) is not senior to member (director)"
        );
    }
}
