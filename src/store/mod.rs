//! Document store access
//!
//! `MeetingStore` is the seam between the service and whatever holds the
//! data. It exposes the primitives the service needs: insert, equality
//! filter, left join against the directory collections, and delete.
//! `MemoryStore` is the bundled implementation; it can be populated from a
//! JSON seed file (see `seed`).

mod memory;
mod seed;

pub use memory::MemoryStore;
pub use seed::{SeedData, SeedSummary};

use crate::model::{Contact, Lead, Meeting, MeetingDraft, MeetingFilter, ObjectId, User};
use anyhow::Result;

/// A meeting left-joined with the records it references
///
/// `user` is `None` when `created_by` resolves to nothing. `contacts` and
/// `leads` follow the order of the meeting's reference lists; references
/// that resolve to nothing are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedMeeting {
    pub meeting: Meeting,
    pub user: Option<User>,
    pub contacts: Vec<Contact>,
    pub leads: Vec<Lead>,
}

/// Storage backend for meetings
#[async_trait::async_trait]
pub trait MeetingStore: Send + Sync {
    /// Persist a new meeting, assigning its identifier and timestamp
    async fn insert(&self, draft: MeetingDraft) -> Result<Meeting>;

    /// Fetch one meeting by identifier
    async fn get(&self, id: ObjectId) -> Result<Option<Meeting>>;

    /// Filter meetings and left-join each one against users, contacts and
    /// leads, in insertion order
    async fn find_joined(&self, filter: &MeetingFilter) -> Result<Vec<JoinedMeeting>>;

    /// Remove one meeting, returning it if it existed
    async fn delete(&self, id: ObjectId) -> Result<Option<Meeting>>;

    /// Remove every meeting matching the filter, returning how many went
    async fn delete_many(&self, filter: &MeetingFilter) -> Result<u64>;

    /// Backend name for logging
    fn name(&self) -> &str;
}
