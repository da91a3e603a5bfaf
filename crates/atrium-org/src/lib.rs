//! # Atrium Organization Management
//!
//! This crate provides the organizational hierarchy and permission
//! engine for the Atrium agency-management platform: the ranked role
//! catalog, the member model, the management graph derived from flat
//! manager references, structural-edit validation, and management
//! authorization.
//!
//! ## Overview
//!
//! The atrium-org crate handles:
//! - **Members**: People records with a role, department, manager
//!   reference, status, and an owned permission matrix
//! - **Roles**: The nine-step seniority ladder and its default policy
//!   templates
//! - **Hierarchy**: An explicit graph built per member snapshot, with
//!   cycle-safe traversals and deterministic ordering
//! - **Validation**: Structural-edit rules for manager reassignment
//! - **Authorization**: Rank- and hierarchy-based management decisions,
//!   plus per-module/per-capability policy checks
//! - **Directory**: The trait seam to the external member store
//!
//! ## Architecture
//!
//! ```text
//! MemberDirectory (external store)
//!   └─ member snapshot
//!        └─ HierarchyGraph (derived, rebuilt after every edit)
//!             ├─ validate_reassignment ─→ MemberPatch ─→ directory
//!             ├─ ManagementAuthorizer.can_manage
//!             └─ children / ancestor_path / descendants / depth
//!
//! AgencyRole ─ rank ─→ validation + authorization
//!            └ default_policy ─→ Permissions (atrium-rbac)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use atrium_org::{
//!     validate_reassignment, AgencyRole, Department, HierarchyGraph, Member,
//! };
//!
//! let ceo = Member::new("Ada Reyes", "ada@atriumhq.dev", AgencyRole::Ceo, Department::Leadership);
//! let director = Member::new("Kai Ode", "kai@atriumhq.dev", AgencyRole::Director, Department::Creative)
//!     .with_manager(ceo.id);
//! let (ceo_id, director_id) = (ceo.id, director.id);
//!
//! let graph = HierarchyGraph::build(vec![ceo, director]).unwrap();
//! assert_eq!(graph.depth(director_id).unwrap(), 1);
//! assert!(validate_reassignment(director_id, ceo_id, &graph).is_ok());
//! ```
//!
//! ## Snapshot Discipline
//!
//! The engine is pure and synchronous: every operation takes a graph or
//! member snapshot and returns a value or error, with no I/O, no locks,
//! and no shared mutable state. A [`HierarchyGraph`] is only as fresh
//! as the snapshot it was built from — after persisting any manager
//! change, fetch a new member list and rebuild before validating or
//! authorizing again.
//!
//! ## Integration with atrium-rbac
//!
//! Permission vocabulary (modules, actions, admin capabilities, data
//! scopes, the [`Permissions`](atrium_rbac::Permissions) matrix) lives
//! in `atrium-rbac`; this crate supplies the role→template catalog and
//! the member-level checks on top of it.

pub mod authorizer;
pub mod directory;
pub mod error;
pub mod hierarchy;
pub mod member;
pub mod resolver;
pub mod roles;
pub mod validation;

// Re-export main types for convenience
pub use authorizer::{is_subordinate, ManagementAuthorizer, ManagementReach};
pub use directory::{DirectoryError, DirectoryResult, InMemoryDirectory, MemberDirectory};
pub use error::{HierarchyError, OrgResult};
pub use hierarchy::{HierarchyGraph, HierarchyNode};
pub use member::{Department, Member, MemberPatch, MemberStatus};
pub use resolver::{
    accessible_modules, default_policy, has_admin_permission, has_module_permission, reset_patch,
};
pub use roles::AgencyRole;
pub use validation::{reassignment_patch, validate_reassignment};
