use super::MemoryStore;
use crate::model::{Contact, Lead, Meeting, User};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Initial store contents loaded from a JSON file
///
/// ```json
/// { "users": [], "contacts": [], "leads": [], "meetings": [] }
/// ```
/// Every key is optional.
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub leads: Vec<Lead>,
    #[serde(default)]
    pub meetings: Vec<Meeting>,
}

/// How many records of each kind a seed contributed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub contacts: usize,
    pub leads: usize,
    pub meetings: usize,
}

impl SeedData {
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;

        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))
    }

    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            users: self.users.len(),
            contacts: self.contacts.len(),
            leads: self.leads.len(),
            meetings: self.meetings.len(),
        }
    }
}

impl MemoryStore {
    /// Load every record from `seed`, replacing records with matching ids
    pub async fn load_seed(&self, seed: SeedData) -> SeedSummary {
        let summary = seed.summary();

        for user in seed.users {
            self.put_user(user).await;
        }
        for contact in seed.contacts {
            self.put_contact(contact).await;
        }
        for lead in seed.leads {
            self.put_lead(lead).await;
        }
        for meeting in seed.meetings {
            self.restore_meeting(meeting).await;
        }

        info!(
            "Seeded store: {} users, {} contacts, {} leads, {} meetings",
            summary.users, summary.contacts, summary.leads, summary.meetings
        );

        summary
    }
}
