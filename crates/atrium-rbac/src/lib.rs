//! # Atrium RBAC (Role-Based Access Control)
//!
//! This crate provides the permission vocabulary for the Atrium
//! agency-management platform: the dashboard modules a member can see,
//! the CRUD actions they may perform inside each module, the
//! administrative capabilities they hold, and the data scope their
//! queries are allowed to cover.
//!
//! ## Overview
//!
//! The atrium-rbac crate handles:
//! - **Modules**: The dashboard surfaces permissions are granted on
//! - **Actions**: The four CRUD operations per module
//! - **Admin capabilities**: Organization-level administrative grants
//! - **Policies**: The full per-member capability matrix ([`Permissions`])
//!
//! ## Architecture
//!
//! ```text
//! Permissions
//!   ├─ one ModuleGrants {view, create, edit, delete} per module
//!   │    (dashboard, tasks, clients, calendar, team, analytics, tags, settings)
//!   ├─ AdminGrants (manage users/roles/permissions, reports, export, billing)
//!   └─ DataScope (all | team | own)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use atrium_rbac::{CrudAction, DataScope, ModuleKind, Permissions};
//!
//! let mut policy = Permissions::none();
//! policy.tasks = atrium_rbac::ModuleGrants::full();
//! policy.data_scope = DataScope::Team;
//!
//! assert!(policy.allows(ModuleKind::Tasks, CrudAction::Edit));
//! assert!(!policy.allows(ModuleKind::Clients, CrudAction::View));
//! ```
//!
//! ## Value Semantics
//!
//! [`Permissions`] is a plain value type: `Clone` produces an independent
//! deep copy and `PartialEq` compares the full capability tree, so role
//! templates can be handed out freely and edited copies diffed against
//! their baseline without any serialization round-trips.
//!
//! ## Integration with atrium-org
//!
//! This crate is policy-only. Ranked roles, the role→template catalog,
//! and the management-hierarchy rules live in `atrium-org`, which builds
//! its default policy templates out of these types.

pub mod actions;
pub mod admin;
pub mod modules;
pub mod policy;

// Re-export main types for convenience
pub use actions::CrudAction;
pub use admin::{AdminGrants, AdminPermission};
pub use modules::ModuleKind;
pub use policy::{DataScope, ModuleGrants, Permissions};
