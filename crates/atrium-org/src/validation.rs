//! Structural-edit validation
//!
//! Reassigning a member's manager is the only structural edit the
//! hierarchy allows, and every proposal runs through
//! [`validate_reassignment`] before the caller persists anything. The
//! validator is a pure predicate over a [`HierarchyGraph`] snapshot:
//! it never mutates state, which keeps it unit-testable against
//! hand-built graphs with no storage in sight.
//!
//! After a validated edit is applied through the directory store, the
//! snapshot is stale; rebuild the graph before the next validation or
//! authorization call. Writers racing over overlapping subtrees must
//! serialize at the storage layer, or two validators can both pass
//! against stale snapshots and jointly introduce a cycle.

use uuid::Uuid;

use crate::error::{HierarchyError, OrgResult};
use crate::hierarchy::HierarchyGraph;
use crate::member::MemberPatch;

/// Validate a proposed manager reassignment.
///
/// Rules, evaluated in order, short-circuiting on the first failure:
///
/// 1. A member cannot manage themselves → [`HierarchyError::SelfAssignment`]
/// 2. Both ids must resolve in the snapshot → [`HierarchyError::UnknownMember`]
/// 3. The proposed manager must not sit in the member's own subtree
///    → [`HierarchyError::CycleWouldForm`]
/// 4. The proposed manager must be strictly senior by rank
///    → [`HierarchyError::ManagerNotSenior`]
///
/// On success the caller applies the change through the directory
/// store and rebuilds the graph.
///
/// # Examples
///
/// ```
/// use atrium_org::{validate_reassignment, AgencyRole, Department, HierarchyGraph, Member};
///
/// let ceo = Member::new("Ada Reyes", "ada@atriumhq.dev", AgencyRole::Ceo, Department::Leadership);
/// let senior = Member::new("Sol Andrade", "sol@atriumhq.dev", AgencyRole::Senior, Department::Sales)
///     .with_manager(ceo.id);
/// let (ceo_id, senior_id) = (ceo.id, senior.id);
///
/// let graph = HierarchyGraph::build(vec![ceo, senior]).unwrap();
/// assert!(validate_reassignment(senior_id, ceo_id, &graph).is_ok());
/// assert!(validate_reassignment(senior_id, senior_id, &graph).is_err());
/// ```
pub fn validate_reassignment(
    member_id: Uuid,
    proposed_manager_id: Uuid,
    graph: &HierarchyGraph,
) -> OrgResult<()> {
    if member_id == proposed_manager_id {
        return Err(HierarchyError::SelfAssignment);
    }

    let member = graph
        .member(member_id)
        .ok_or(HierarchyError::UnknownMember(member_id))?;
    let proposed_manager = graph
        .member(proposed_manager_id)
        .ok_or(HierarchyError::UnknownMember(proposed_manager_id))?;

    if graph.is_descendant_of(proposed_manager_id, member_id) {
        return Err(HierarchyError::CycleWouldForm {
            member: member_id,
            proposed_manager: proposed_manager_id,
        });
    }

    if !proposed_manager.role.outranks(member.role) {
        return Err(HierarchyError::ManagerNotSenior {
            manager_role: proposed_manager.role,
            member_role: member.role,
        });
    }

    Ok(())
}

/// Validate a reassignment and package it as a [`MemberPatch`] for the
/// directory store.
///
/// Convenience over [`validate_reassignment`]; the returned patch
/// carries only the `manager_id` change.
pub fn reassignment_patch(
    member_id: Uuid,
    proposed_manager_id: Uuid,
    graph: &HierarchyGraph,
) -> OrgResult<MemberPatch> {
    validate_reassignment(member_id, proposed_manager_id, graph)?;
    Ok(MemberPatch::reassign_manager(proposed_manager_id))
}
