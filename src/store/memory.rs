use super::{JoinedMeeting, MeetingStore};
use crate::model::{Contact, Lead, Meeting, MeetingDraft, MeetingFilter, ObjectId, User};
use anyhow::Result;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct Collections {
    /// Insertion order is the natural order for queries
    meetings: Vec<Meeting>,
    users: HashMap<ObjectId, User>,
    contacts: HashMap<ObjectId, Contact>,
    leads: HashMap<ObjectId, Lead>,
}

impl Collections {
    fn join(&self, meeting: &Meeting) -> JoinedMeeting {
        JoinedMeeting {
            meeting: meeting.clone(),
            user: self.users.get(&meeting.created_by).cloned(),
            contacts: meeting
                .attendees
                .iter()
                .filter_map(|id| self.contacts.get(id).cloned())
                .collect(),
            leads: meeting
                .attendee_leads
                .iter()
                .filter_map(|id| self.leads.get(id).cloned())
                .collect(),
        }
    }
}

/// In-process document store
///
/// All collections sit behind one lock, so every operation sees a
/// consistent snapshot and mutations are atomic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user
    pub async fn put_user(&self, user: User) {
        self.inner.write().await.users.insert(user.id, user);
    }

    /// Insert or replace a contact
    pub async fn put_contact(&self, contact: Contact) {
        self.inner.write().await.contacts.insert(contact.id, contact);
    }

    /// Insert or replace a lead
    pub async fn put_lead(&self, lead: Lead) {
        self.inner.write().await.leads.insert(lead.id, lead);
    }

    /// Insert a meeting that already has an identifier, replacing any
    /// meeting with the same identifier in place
    pub async fn restore_meeting(&self, meeting: Meeting) {
        let id = meeting.id;
        let mut inner = self.inner.write().await;
        match inner.meetings.iter_mut().find(|m| m.id == id) {
            Some(existing) => *existing = meeting,
            None => inner.meetings.push(meeting),
        }
    }

    /// Number of stored meetings
    pub async fn meeting_count(&self) -> usize {
        self.inner.read().await.meetings.len()
    }
}

#[async_trait::async_trait]
impl MeetingStore for MemoryStore {
    async fn insert(&self, draft: MeetingDraft) -> Result<Meeting> {
        let meeting = draft.into_meeting(ObjectId::new(), Utc::now());

        let mut inner = self.inner.write().await;
        inner.meetings.push(meeting.clone());
        debug!("Inserted meeting {} ({} total)", meeting.id, inner.meetings.len());

        Ok(meeting)
    }

    async fn get(&self, id: ObjectId) -> Result<Option<Meeting>> {
        let inner = self.inner.read().await;
        Ok(inner.meetings.iter().find(|m| m.id == id).cloned())
    }

    async fn find_joined(&self, filter: &MeetingFilter) -> Result<Vec<JoinedMeeting>> {
        let inner = self.inner.read().await;
        Ok(inner
            .meetings
            .iter()
            .filter(|m| filter.matches(m))
            .map(|m| inner.join(m))
            .collect())
    }

    async fn delete(&self, id: ObjectId) -> Result<Option<Meeting>> {
        let mut inner = self.inner.write().await;
        let position = inner.meetings.iter().position(|m| m.id == id);
        Ok(position.map(|idx| inner.meetings.remove(idx)))
    }

    async fn delete_many(&self, filter: &MeetingFilter) -> Result<u64> {
        let mut inner = self.inner.write().await;
        let before = inner.meetings.len();
        inner.meetings.retain(|m| !filter.matches(m));
        Ok((before - inner.meetings.len()) as u64)
    }

    fn name(&self) -> &str {
        "memory"
    }
}
