//! Management authorization
//!
//! Answers "can actor A manage target member B" by combining rank
//! comparison with hierarchy membership. How far delegated authority
//! reaches is an explicit configuration: the product default limits a
//! manager to their direct reports, but hosts can opt into the full
//! subtree.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hierarchy::HierarchyGraph;
use crate::member::Member;
use crate::roles::AgencyRole;

/// How far down the tree a manager's delegated authority reaches.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ManagementReach {
    /// Direct reports only (product default).
    #[default]
    DirectReports,
    /// The whole subtree under the actor.
    Subtree,
}

/// Decides whether one member may manage another.
///
/// # Examples
///
/// ```
/// use atrium_org::{AgencyRole, Department, HierarchyGraph, ManagementAuthorizer, Member};
///
/// let ceo = Member::new("Ada Reyes", "ada@atriumhq.dev", AgencyRole::Ceo, Department::Leadership);
/// let mgr = Member::new("Noa Lindqvist", "noa@atriumhq.dev", AgencyRole::Manager, Department::Sales)
///     .with_manager(ceo.id);
/// let rep = Member::new("Io Marchetti", "io@atriumhq.dev", AgencyRole::Junior, Department::Sales)
///     .with_manager(mgr.id);
///
/// let graph = HierarchyGraph::build(vec![ceo.clone(), mgr.clone(), rep.clone()]).unwrap();
/// let authorizer = ManagementAuthorizer::default();
///
/// assert!(authorizer.can_manage(&ceo, &rep, &graph));
/// assert!(authorizer.can_manage(&mgr, &rep, &graph));
/// assert!(!authorizer.can_manage(&rep, &mgr, &graph));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagementAuthorizer {
    reach: ManagementReach,
}

impl ManagementAuthorizer {
    /// Create an authorizer with the given reach.
    pub fn new(reach: ManagementReach) -> Self {
        Self { reach }
    }

    /// The configured reach.
    pub fn reach(&self) -> ManagementReach {
        self.reach
    }

    /// Check whether `actor` may manage `target`.
    ///
    /// - The CEO may manage anyone.
    /// - Nobody manages themselves.
    /// - The target must be strictly junior by rank.
    /// - The target must sit within the actor's reach: their direct
    ///   reports, or their whole subtree when configured with
    ///   [`ManagementReach::Subtree`].
    pub fn can_manage(&self, actor: &Member, target: &Member, graph: &HierarchyGraph) -> bool {
        if actor.role == AgencyRole::Ceo {
            return true;
        }
        if actor.id == target.id {
            return false;
        }
        if !actor.role.outranks(target.role) {
            return false;
        }
        match self.reach {
            ManagementReach::DirectReports => {
                graph.children(actor.id).iter().any(|m| m.id == target.id)
            }
            ManagementReach::Subtree => graph.is_descendant_of(target.id, actor.id),
        }
    }
}

/// Check whether `member` sits anywhere under `ancestor`, however deep.
///
/// The transitive companion to a direct-reports check; also what
/// [`ManagementReach::Subtree`] consults.
pub fn is_subordinate(graph: &HierarchyGraph, ancestor_id: Uuid, member_id: Uuid) -> bool {
    graph.is_descendant_of(member_id, ancestor_id)
}
