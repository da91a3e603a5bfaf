//! Member directory seam
//!
//! The engine never persists anything itself; member records live in an
//! external directory store. This module defines the trait the engine's
//! callers consume — fetch a snapshot, apply an already-validated
//! patch — plus an in-memory implementation for tests and embedding.
//!
//! A directory handle is scoped to a single organization (tenant), so
//! the methods carry no tenant parameter.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::member::{Member, MemberPatch};

/// Directory store error types.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The id does not resolve to a member record
    #[error("Member not found: {0}")]
    MemberNotFound(Uuid),

    /// The backing store failed
    #[error("Directory backend error: {0}")]
    Backend(String),
}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// External directory store holding the member records.
///
/// Implementations are expected to serialize writes per tenant (a write
/// lock or optimistic version check); two reassignments validated
/// against the same stale snapshot can otherwise jointly introduce a
/// cycle the validator would have rejected.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Fetch the full member snapshot for graph construction.
    async fn list_members(&self) -> DirectoryResult<Vec<Member>>;

    /// Fetch a single member record.
    async fn get_member(&self, id: Uuid) -> DirectoryResult<Member>;

    /// Apply an already-validated patch and return the updated record.
    async fn update_member(&self, id: Uuid, patch: MemberPatch) -> DirectoryResult<Member>;
}

/// In-memory member directory.
///
/// Backs tests and single-process embeddings; writes serialize on an
/// internal lock.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    members: RwLock<HashMap<Uuid, Member>>,
}

impl InMemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory seeded with the given members.
    pub fn with_members(members: impl IntoIterator<Item = Member>) -> Self {
        Self {
            members: RwLock::new(members.into_iter().map(|m| (m.id, m)).collect()),
        }
    }

    /// Insert or replace a member record.
    pub fn insert(&self, member: Member) {
        self.members
            .write()
            .expect("directory lock poisoned")
            .insert(member.id, member);
    }
}

#[async_trait]
impl MemberDirectory for InMemoryDirectory {
    async fn list_members(&self) -> DirectoryResult<Vec<Member>> {
        let members = self
            .members
            .read()
            .map_err(|e| DirectoryError::Backend(e.to_string()))?;
        Ok(members.values().cloned().collect())
    }

    async fn get_member(&self, id: Uuid) -> DirectoryResult<Member> {
        let members = self
            .members
            .read()
            .map_err(|e| DirectoryError::Backend(e.to_string()))?;
        members
            .get(&id)
            .cloned()
            .ok_or(DirectoryError::MemberNotFound(id))
    }

    async fn update_member(&self, id: Uuid, patch: MemberPatch) -> DirectoryResult<Member> {
        let mut members = self
            .members
            .write()
            .map_err(|e| DirectoryError::Backend(e.to_string()))?;
        let member = members
            .get_mut(&id)
            .ok_or(DirectoryError::MemberNotFound(id))?;
        patch.apply(member);
        Ok(member.clone())
    }
}
