//! Management hierarchy graph
//!
//! This module derives an explicit graph value from a flat member
//! snapshot. Members reference their manager by id; the graph indexes
//! those edges once, so every traversal works against one immutable
//! snapshot instead of re-walking storage order.
//!
//! A graph is valid only for the snapshot it was built from. After any
//! manager reassignment is persisted, callers must fetch a fresh member
//! list and rebuild; holding on to the old graph reintroduces exactly
//! the stale-read hazard this type exists to make explicit.
//!
//! Even when invalid data (a manager cycle, a dangling manager
//! reference) reaches storage behind the validator's back, every
//! traversal terminates and reports instead of spinning.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use serde::Serialize;
use uuid::Uuid;

use crate::error::{HierarchyError, OrgResult};
use crate::member::Member;
use crate::roles::AgencyRole;

/// Transient tree view over a member and their reports.
///
/// Built on demand from a [`HierarchyGraph`]; not a stored entity. The
/// dashboard serializes this directly when rendering org charts.
#[derive(Debug, Clone, Serialize)]
pub struct HierarchyNode {
    /// The member at this node.
    pub member: Member,
    /// Direct reports, ordered by (rank, name).
    pub children: Vec<HierarchyNode>,
}

/// In-memory management graph over one member snapshot.
///
/// Child lists are computed once at build time and ordered by
/// `(rank ascending, full name ascending)`, so traversal output is
/// deterministic regardless of the order the directory returned the
/// snapshot in.
///
/// # Examples
///
/// ```
/// use atrium_org::{AgencyRole, Department, HierarchyGraph, Member};
///
/// let ceo = Member::new("Ada Reyes", "ada@atriumhq.dev", AgencyRole::Ceo, Department::Leadership);
/// let vp = Member::new("Kai Ode", "kai@atriumhq.dev", AgencyRole::Vp, Department::Leadership)
///     .with_manager(ceo.id);
/// let ceo_id = ceo.id;
///
/// let graph = HierarchyGraph::build(vec![ceo, vp]).unwrap();
/// assert_eq!(graph.children(ceo_id).len(), 1);
/// assert_eq!(graph.depth(ceo_id).unwrap(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct HierarchyGraph {
    index: HashMap<Uuid, Member>,
    children: HashMap<Uuid, Vec<Uuid>>,
    roots: Vec<Uuid>,
}

impl HierarchyGraph {
    /// Build a graph from a member snapshot.
    ///
    /// Fails with [`HierarchyError::MissingRoot`] when the snapshot has
    /// no CEO-ranked member. Degenerate shapes short of that are
    /// tolerated so read-only queries keep working: a member whose
    /// `manager_id` does not resolve within the snapshot is treated as
    /// the root of their own component, and multiple top-level members
    /// are only rejected by the operations that need a single
    /// unambiguous root ([`root`](Self::root),
    /// [`tree`](Self::tree), [`depth_distribution`](Self::depth_distribution)).
    pub fn build(members: impl IntoIterator<Item = Member>) -> OrgResult<Self> {
        let index: HashMap<Uuid, Member> =
            members.into_iter().map(|m| (m.id, m)).collect();

        if !index.values().any(|m| m.role == AgencyRole::Ceo) {
            return Err(HierarchyError::MissingRoot);
        }

        let mut children: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        let mut roots: Vec<Uuid> = Vec::new();
        for member in index.values() {
            match member.manager_id {
                Some(manager_id) if index.contains_key(&manager_id) => {
                    children.entry(manager_id).or_default().push(member.id);
                }
                // No manager, or a manager outside the snapshot.
                _ => roots.push(member.id),
            }
        }

        let by_rank_and_name = |a: &Uuid, b: &Uuid| {
            let ma = &index[a];
            let mb = &index[b];
            ma.role
                .rank()
                .cmp(&mb.role.rank())
                .then_with(|| ma.full_name.cmp(&mb.full_name))
                .then_with(|| ma.id.cmp(&mb.id))
        };
        for list in children.values_mut() {
            list.sort_by(by_rank_and_name);
        }
        roots.sort_by(by_rank_and_name);

        Ok(Self {
            index,
            children,
            roots,
        })
    }

    /// Number of members in the snapshot.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Check whether an id resolves to a member.
    pub fn contains(&self, id: Uuid) -> bool {
        self.index.contains_key(&id)
    }

    /// Look up a member by id.
    pub fn member(&self, id: Uuid) -> Option<&Member> {
        self.index.get(&id)
    }

    /// Iterate over all members, in no particular order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.index.values()
    }

    /// Top-level members (no manager inside the snapshot), ordered by
    /// (rank, name).
    pub fn roots(&self) -> Vec<&Member> {
        self.roots.iter().map(|id| &self.index[id]).collect()
    }

    /// The single organization root.
    ///
    /// Fails with [`HierarchyError::AmbiguousRoot`] when the snapshot
    /// has more than one top-level member, and
    /// [`HierarchyError::MissingRoot`] when it has none (every member
    /// sits inside a manager cycle).
    pub fn root(&self) -> OrgResult<&Member> {
        match self.roots.as_slice() {
            [] => Err(HierarchyError::MissingRoot),
            [id] => Ok(&self.index[id]),
            many => Err(HierarchyError::AmbiguousRoot(many.len())),
        }
    }

    /// Direct reports of a member, ordered by (rank, name).
    ///
    /// Returns an empty list for unknown ids and for members with no
    /// reports.
    pub fn children(&self, id: Uuid) -> Vec<&Member> {
        self.children
            .get(&id)
            .map(|ids| ids.iter().map(|cid| &self.index[cid]).collect())
            .unwrap_or_default()
    }

    /// The management chain from the component root down to `id`,
    /// inclusive: `[root, …, id]`.
    ///
    /// The walk is bounded by a visited set, so a manager cycle in the
    /// stored data yields [`HierarchyError::CycleDetected`] after at
    /// most one pass over the chain instead of looping forever.
    pub fn ancestor_path(&self, id: Uuid) -> OrgResult<Vec<&Member>> {
        let mut current = self
            .index
            .get(&id)
            .ok_or(HierarchyError::UnknownMember(id))?;

        let mut path = vec![current];
        let mut seen: HashSet<Uuid> = HashSet::from([id]);
        while let Some(manager_id) = current.manager_id {
            let Some(manager) = self.index.get(&manager_id) else {
                // Dangling reference: the chain ends at this component.
                break;
            };
            if !seen.insert(manager_id) {
                return Err(HierarchyError::CycleDetected(manager_id));
            }
            path.push(manager);
            current = manager;
        }

        path.reverse();
        Ok(path)
    }

    /// All transitive reports of a member, breadth-first.
    ///
    /// Exhaustive and cycle-safe: a visited set guards the walk, so it
    /// terminates even over invalid data. Unknown ids yield an empty
    /// list.
    pub fn descendants(&self, id: Uuid) -> Vec<&Member> {
        let mut out = Vec::new();
        let mut seen: HashSet<Uuid> = HashSet::from([id]);
        let mut queue: VecDeque<Uuid> = VecDeque::from([id]);

        while let Some(next) = queue.pop_front() {
            if let Some(child_ids) = self.children.get(&next) {
                for child_id in child_ids {
                    if seen.insert(*child_id) {
                        out.push(&self.index[child_id]);
                        queue.push_back(*child_id);
                    }
                }
            }
        }
        out
    }

    /// Check whether `member` reports to `ancestor`, directly or
    /// transitively.
    pub fn is_descendant_of(&self, member: Uuid, ancestor: Uuid) -> bool {
        self.descendants(ancestor).iter().any(|m| m.id == member)
    }

    /// Management depth of a member: 0 for a root, 1 for their direct
    /// reports, and so on.
    pub fn depth(&self, id: Uuid) -> OrgResult<usize> {
        Ok(self.ancestor_path(id)?.len() - 1)
    }

    /// Histogram of active members by depth, for organizational
    /// reporting.
    ///
    /// Requires a single unambiguous root; a degenerate multi-root
    /// snapshot fails with [`HierarchyError::AmbiguousRoot`] rather
    /// than silently reporting per-component depths as org-wide ones.
    pub fn depth_distribution(&self) -> OrgResult<BTreeMap<usize, usize>> {
        self.root()?;

        let mut histogram = BTreeMap::new();
        for member in self.index.values() {
            if !member.is_active() {
                continue;
            }
            *histogram.entry(self.depth(member.id)?).or_insert(0) += 1;
        }
        Ok(histogram)
    }

    /// Build the transient tree view rooted at `id`.
    ///
    /// Returns `None` for unknown ids. A visited set keeps the
    /// recursion finite over invalid data; a member reached twice is
    /// simply not expanded again.
    pub fn subtree(&self, id: Uuid) -> Option<HierarchyNode> {
        let member = self.index.get(&id)?;
        let mut seen = HashSet::from([id]);
        Some(self.subtree_inner(member, &mut seen))
    }

    fn subtree_inner(&self, member: &Member, seen: &mut HashSet<Uuid>) -> HierarchyNode {
        let mut children = Vec::new();
        if let Some(child_ids) = self.children.get(&member.id) {
            for child_id in child_ids {
                if seen.insert(*child_id) {
                    children.push(self.subtree_inner(&self.index[child_id], seen));
                }
            }
        }
        HierarchyNode {
            member: member.clone(),
            children,
        }
    }

    /// Build the full org-chart tree from the single root.
    ///
    /// Fails like [`root`](Self::root) on degenerate snapshots.
    pub fn tree(&self) -> OrgResult<HierarchyNode> {
        let root = self.root()?;
        let mut seen = HashSet::from([root.id]);
        Ok(self.subtree_inner(root, &mut seen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::Department;

    fn member(name: &str, role: AgencyRole) -> Member {
        Member::new(
            name,
            format!("{}@atriumhq.dev", name.to_lowercase().replace(' ', ".")),
            role,
            Department::Operations,
        )
    }

    /// CEO → VP → {Manager A, Manager B} → (A: Senior, Junior)
    fn sample_org() -> (Vec<Member>, [Uuid; 6]) {
        let ceo = member("Ada Reyes", AgencyRole::Ceo);
        let vp = member("Kai Ode", AgencyRole::Vp).with_manager(ceo.id);
        let mgr_a = member("Noa Lindqvist", AgencyRole::Manager).with_manager(vp.id);
        let mgr_b = member("Rin Sato", AgencyRole::Manager).with_manager(vp.id);
        let senior = member("Sol Andrade", AgencyRole::Senior).with_manager(mgr_a.id);
        let junior = member("Io Marchetti", AgencyRole::Junior).with_manager(mgr_a.id);

        let ids = [ceo.id, vp.id, mgr_a.id, mgr_b.id, senior.id, junior.id];
        (vec![ceo, vp, mgr_a, mgr_b, senior, junior], ids)
    }

    #[test]
    fn test_build_requires_a_ceo() {
        let lone = member("Kai Ode", AgencyRole::Vp);
        assert_eq!(
            HierarchyGraph::build(vec![lone]).unwrap_err(),
            HierarchyError::MissingRoot
        );
    }

    #[test]
    fn test_root_and_roots() {
        let (members, ids) = sample_org();
        let graph = HierarchyGraph::build(members).unwrap();

        assert_eq!(graph.len(), 6);
        assert_eq!(graph.root().unwrap().id, ids[0]);
        assert_eq!(graph.roots().len(), 1);
    }

    #[test]
    fn test_children_ordered_by_rank_then_name() {
        let (members, ids) = sample_org();
        let graph = HierarchyGraph::build(members).unwrap();

        let reports = graph.children(ids[2]);
        assert_eq!(reports.len(), 2);
        // Senior (rank 5) sorts before Junior (rank 7).
        assert_eq!(reports[0].id, ids[4]);
        assert_eq!(reports[1].id, ids[5]);

        let managers = graph.children(ids[1]);
        // Equal rank: name breaks the tie. "Noa…" < "Rin…"
        assert_eq!(managers[0].id, ids[2]);
        assert_eq!(managers[1].id, ids[3]);
    }

    #[test]
    fn test_ordering_independent_of_input_order() {
        let (mut members, ids) = sample_org();
        let graph_a = HierarchyGraph::build(members.clone()).unwrap();
        members.reverse();
        let graph_b = HierarchyGraph::build(members).unwrap();

        let order = |g: &HierarchyGraph| -> Vec<Uuid> {
            g.children(ids[1]).iter().map(|m| m.id).collect()
        };
        assert_eq!(order(&graph_a), order(&graph_b));
    }

    #[test]
    fn test_ancestor_path_inclusive() {
        let (members, ids) = sample_org();
        let graph = HierarchyGraph::build(members).unwrap();

        let path: Vec<Uuid> = graph
            .ancestor_path(ids[4])
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(path, vec![ids[0], ids[1], ids[2], ids[4]]);

        let root_path = graph.ancestor_path(ids[0]).unwrap();
        assert_eq!(root_path.len(), 1);
    }

    #[test]
    fn test_ancestor_path_unknown_member() {
        let (members, _) = sample_org();
        let graph = HierarchyGraph::build(members).unwrap();
        let ghost = Uuid::now_v7();

        assert_eq!(
            graph.ancestor_path(ghost).unwrap_err(),
            HierarchyError::UnknownMember(ghost)
        );
    }

    #[test]
    fn test_depth() {
        let (members, ids) = sample_org();
        let graph = HierarchyGraph::build(members).unwrap();

        assert_eq!(graph.depth(ids[0]).unwrap(), 0);
        assert_eq!(graph.depth(ids[1]).unwrap(), 1);
        assert_eq!(graph.depth(ids[5]).unwrap(), 3);
    }

    #[test]
    fn test_descendants_exhaustive() {
        let (members, ids) = sample_org();
        let graph = HierarchyGraph::build(members).unwrap();

        let all: HashSet<Uuid> = graph.descendants(ids[0]).iter().map(|m| m.id).collect();
        assert_eq!(all, HashSet::from([ids[1], ids[2], ids[3], ids[4], ids[5]]));

        let team_a: HashSet<Uuid> = graph.descendants(ids[2]).iter().map(|m| m.id).collect();
        assert_eq!(team_a, HashSet::from([ids[4], ids[5]]));

        assert!(graph.descendants(ids[5]).is_empty());
        assert!(graph.descendants(Uuid::now_v7()).is_empty());
    }

    #[test]
    fn test_is_descendant_of() {
        let (members, ids) = sample_org();
        let graph = HierarchyGraph::build(members).unwrap();

        assert!(graph.is_descendant_of(ids[4], ids[0]));
        assert!(graph.is_descendant_of(ids[4], ids[2]));
        assert!(!graph.is_descendant_of(ids[4], ids[3]));
        assert!(!graph.is_descendant_of(ids[0], ids[4]));
    }

    #[test]
    fn test_depth_distribution_counts_active_only() {
        let (mut members, _) = sample_org();
        // Put the junior on leave; they drop out of the histogram.
        members[5].status = crate::member::MemberStatus::OnLeave;
        let graph = HierarchyGraph::build(members).unwrap();

        let histogram = graph.depth_distribution().unwrap();
        assert_eq!(histogram[&0], 1);
        assert_eq!(histogram[&1], 1);
        assert_eq!(histogram[&2], 2);
        assert_eq!(histogram[&3], 1);
    }

    #[test]
    fn test_degenerate_multi_root_still_traverses() {
        let ceo = member("Ada Reyes", AgencyRole::Ceo);
        // Orphaned director: manager reference points outside the snapshot.
        let stray = member("Kai Ode", AgencyRole::Director).with_manager(Uuid::now_v7());
        let report = member("Noa Lindqvist", AgencyRole::Senior).with_manager(stray.id);
        let (ceo_id, stray_id, report_id) = (ceo.id, stray.id, report.id);

        let graph = HierarchyGraph::build(vec![ceo, stray, report]).unwrap();

        // Read-only queries keep working per component.
        assert_eq!(graph.children(stray_id).len(), 1);
        assert_eq!(graph.depth(report_id).unwrap(), 1);
        assert_eq!(graph.descendants(ceo_id).len(), 0);

        // Single-root operations flag the ambiguity.
        assert_eq!(
            graph.root().unwrap_err(),
            HierarchyError::AmbiguousRoot(2)
        );
        assert!(graph.depth_distribution().is_err());
        assert!(graph.tree().is_err());
    }

    #[test]
    fn test_cycle_detected_instead_of_hanging() {
        // Build valid members first, then corrupt the edges the way a
        // buggy writer bypassing validation would.
        let ceo = member("Ada Reyes", AgencyRole::Ceo);
        let mut a = member("Kai Ode", AgencyRole::Director);
        let mut b = member("Noa Lindqvist", AgencyRole::Manager);
        a.manager_id = Some(b.id);
        b.manager_id = Some(a.id);
        let (a_id, b_id) = (a.id, b.id);

        let graph = HierarchyGraph::build(vec![ceo, a, b]).unwrap();

        assert!(matches!(
            graph.ancestor_path(a_id).unwrap_err(),
            HierarchyError::CycleDetected(_)
        ));
        // Descendant walks terminate despite the cycle.
        let reachable = graph.descendants(a_id);
        assert_eq!(reachable.len(), 1);
        assert_eq!(reachable[0].id, b_id);
    }

    #[test]
    fn test_subtree_and_tree() {
        let (members, ids) = sample_org();
        let graph = HierarchyGraph::build(members).unwrap();

        let tree = graph.tree().unwrap();
        assert_eq!(tree.member.id, ids[0]);
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].member.id, ids[1]);
        assert_eq!(tree.children[0].children.len(), 2);

        let sub = graph.subtree(ids[2]).unwrap();
        assert_eq!(sub.children.len(), 2);
        assert!(graph.subtree(Uuid::now_v7()).is_none());
    }
}
