// Test doubles shared by the integration tests

use anyhow::{anyhow, Result};
use crm_meetings::model::MeetingDraft;
use crm_meetings::{JoinedMeeting, Meeting, MeetingFilter, MeetingStore, ObjectId};

pub const STORE_DOWN: &str = "connection refused";

/// Store whose every operation fails
pub struct UnavailableStore;

#[async_trait::async_trait]
impl MeetingStore for UnavailableStore {
    async fn insert(&self, _draft: MeetingDraft) -> Result<Meeting> {
        Err(anyhow!(STORE_DOWN))
    }

    async fn get(&self, _id: ObjectId) -> Result<Option<Meeting>> {
        Err(anyhow!(STORE_DOWN))
    }

    async fn find_joined(&self, _filter: &MeetingFilter) -> Result<Vec<JoinedMeeting>> {
        Err(anyhow!(STORE_DOWN))
    }

    async fn delete(&self, _id: ObjectId) -> Result<Option<Meeting>> {
        Err(anyhow!(STORE_DOWN))
    }

    async fn delete_many(&self, _filter: &MeetingFilter) -> Result<u64> {
        Err(anyhow!(STORE_DOWN))
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}
