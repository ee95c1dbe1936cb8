use super::enrich::{enrich, enrich_one};
use crate::error::{MeetingError, MeetingResult};
use crate::model::{
    EnrichedMeeting, Meeting, MeetingDraft, MeetingFilter, NewMeeting, ObjectId,
};
use crate::store::MeetingStore;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Meeting use cases on top of a `MeetingStore`
///
/// Holds no state besides the store handle; every call is one independent
/// round trip.
#[derive(Clone)]
pub struct MeetingService {
    store: Arc<dyn MeetingStore>,
}

impl MeetingService {
    pub fn new(store: Arc<dyn MeetingStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new meeting
    ///
    /// Nothing is written when any reference field is malformed.
    pub async fn create(&self, input: NewMeeting) -> MeetingResult<Meeting> {
        let draft = MeetingDraft::try_from(input).map_err(|e| {
            warn!("Rejected meeting: {}", e);
            e
        })?;

        let meeting = self
            .store
            .insert(draft)
            .await
            .map_err(|e| self.fail("Failed to create meeting", e))?;

        info!("Created meeting {} (createdBy={})", meeting.id, meeting.created_by);
        Ok(meeting)
    }

    /// List enriched meetings matching `filter`
    ///
    /// Meetings whose creator is soft-deleted are left out.
    pub async fn list(&self, filter: &MeetingFilter) -> MeetingResult<Vec<EnrichedMeeting>> {
        let rows = self
            .store
            .find_joined(filter)
            .await
            .map_err(|e| self.fail("Failed to fetch meetings", e))?;

        let total = rows.len();
        let meetings = enrich(rows);
        info!(
            "Listed {} meetings ({} hidden by deleted creator)",
            meetings.len(),
            total - meetings.len()
        );

        Ok(meetings)
    }

    /// View one enriched meeting
    ///
    /// Unlike `list`, a meeting whose creator is soft-deleted is still
    /// returned, without enrichment.
    pub async fn view(&self, id: ObjectId) -> MeetingResult<EnrichedMeeting> {
        const FAILURE: &str = "Failed to fetch meeting";

        let meeting = self
            .store
            .get(id)
            .await
            .map_err(|e| self.fail(FAILURE, e))?
            .ok_or(MeetingError::NotFound)?;

        let row = self
            .store
            .find_joined(&MeetingFilter::by_id(meeting.id))
            .await
            .map_err(|e| self.fail(FAILURE, e))?
            .into_iter()
            .next();

        let Some(row) = row else {
            warn!("Meeting {} disappeared before enrichment", id);
            return Err(MeetingError::NotFound);
        };

        let base = row.meeting.clone();
        Ok(enrich_one(row).unwrap_or_else(|| EnrichedMeeting::bare(base)))
    }

    /// Delete one meeting, returning the removed record
    pub async fn delete_one(&self, id: ObjectId) -> MeetingResult<Meeting> {
        let removed = self
            .store
            .delete(id)
            .await
            .map_err(|e| self.fail("Failed to delete meeting", e))?
            .ok_or(MeetingError::NotFound)?;

        info!("Deleted meeting {}", removed.id);
        Ok(removed)
    }

    /// Delete every meeting matching `filter`, returning the count
    pub async fn delete_many(&self, filter: &MeetingFilter) -> MeetingResult<u64> {
        let count = self
            .store
            .delete_many(filter)
            .await
            .map_err(|e| self.fail("Failed to delete meetings", e))?;

        if count == 0 {
            return Err(MeetingError::NothingToDelete);
        }

        info!("Deleted {} meetings", count);
        Ok(count)
    }

    fn fail(&self, message: &'static str, err: anyhow::Error) -> MeetingError {
        error!("{} (store={}): {:#}", message, self.store.name(), err);
        MeetingError::store(message, err)
    }
}
