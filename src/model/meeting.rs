use super::id::ObjectId;
use crate::error::{MeetingError, MeetingResult};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Zone-less forms accepted for `dateTime`, read as UTC
///
/// `%Y-%m-%dT%H:%M` is what a browser `datetime-local` input sends.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// A persisted meeting record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Store-assigned identifier, immutable once set
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub agenda: Option<String>,

    /// Contact references, in the order given at creation
    #[serde(default)]
    pub attendees: Vec<ObjectId>,

    /// Lead references, in the order given at creation
    #[serde(default)]
    pub attendee_leads: Vec<ObjectId>,

    pub location: Option<String>,

    /// Kind of record this meeting relates to (e.g. "Contact", "Lead")
    pub related: Option<String>,

    /// When the meeting takes place
    pub date_time: Option<DateTime<Utc>>,

    pub notes: Option<String>,

    /// User who created the meeting
    pub created_by: ObjectId,

    #[serde(default)]
    pub deleted: bool,

    /// When the record was stored
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// Request body for creating a meeting, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeeting {
    pub agenda: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub attendee_leads: Vec<String>,
    pub location: Option<String>,
    pub related: Option<String>,
    /// RFC 3339, or a zone-less local form taken as UTC
    #[serde(default, deserialize_with = "deserialize_date_time")]
    pub date_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
}

/// Parse a meeting time given with or without a zone
fn parse_date_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn deserialize_date_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_date_time(&raw)
                .ok_or_else(|| de::Error::custom(format!("invalid dateTime '{}'", raw)))
        })
        .transpose()
}

/// Validated meeting fields, ready to be persisted
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingDraft {
    pub agenda: Option<String>,
    pub attendees: Vec<ObjectId>,
    pub attendee_leads: Vec<ObjectId>,
    pub location: Option<String>,
    pub related: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_by: ObjectId,
}

impl MeetingDraft {
    /// Attach the store-assigned identity and creation time
    pub fn into_meeting(self, id: ObjectId, timestamp: DateTime<Utc>) -> Meeting {
        Meeting {
            id,
            agenda: self.agenda,
            attendees: self.attendees,
            attendee_leads: self.attendee_leads,
            location: self.location,
            related: self.related,
            date_time: self.date_time,
            notes: self.notes,
            created_by: self.created_by,
            deleted: false,
            timestamp,
        }
    }
}

impl TryFrom<NewMeeting> for MeetingDraft {
    type Error = MeetingError;

    fn try_from(input: NewMeeting) -> MeetingResult<Self> {
        let created_by = input
            .created_by
            .as_deref()
            .and_then(|s| s.parse::<ObjectId>().ok())
            .ok_or(MeetingError::invalid("createdBy"))?;

        Ok(Self {
            agenda: input.agenda,
            attendees: parse_refs(&input.attendees, "attendees")?,
            attendee_leads: parse_refs(&input.attendee_leads, "attendeeLeads")?,
            location: input.location,
            related: input.related,
            date_time: input.date_time,
            notes: input.notes,
            created_by,
        })
    }
}

fn parse_refs(raw: &[String], field: &'static str) -> MeetingResult<Vec<ObjectId>> {
    raw.iter()
        .map(|s| s.parse().map_err(|_| MeetingError::invalid(field)))
        .collect()
}

/// A meeting with the display names of everything it references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedMeeting {
    #[serde(flatten)]
    pub meeting: Meeting,

    /// "firstName lastName" of the creating user; absent when no user joined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_name: Option<String>,

    #[serde(default)]
    pub attendee_names: Vec<String>,

    #[serde(default)]
    pub attendee_lead_names: Vec<String>,
}

impl EnrichedMeeting {
    /// The base record with no enrichment attached
    pub fn bare(meeting: Meeting) -> Self {
        Self {
            meeting,
            created_by_name: None,
            attendee_names: Vec::new(),
            attendee_lead_names: Vec::new(),
        }
    }
}

/// Equality filter over the supported meeting fields
///
/// An empty filter matches every meeting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingFilter {
    pub id: Option<ObjectId>,
    pub created_by: Option<ObjectId>,
}

impl MeetingFilter {
    pub fn by_id(id: ObjectId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn by_creator(created_by: ObjectId) -> Self {
        Self {
            created_by: Some(created_by),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.created_by.is_none()
    }

    pub fn matches(&self, meeting: &Meeting) -> bool {
        self.id.map_or(true, |id| meeting.id == id)
            && self.created_by.map_or(true, |c| meeting.created_by == c)
    }
}

/// Raw filter as received in a query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MeetingQuery {
    #[serde(rename = "_id", alias = "id")]
    pub id: Option<String>,
    pub created_by: Option<String>,
}

impl TryFrom<MeetingQuery> for MeetingFilter {
    type Error = MeetingError;

    fn try_from(query: MeetingQuery) -> MeetingResult<Self> {
        Ok(Self {
            id: parse_opt(query.id.as_deref(), "_id")?,
            created_by: parse_opt(query.created_by.as_deref(), "createdBy")?,
        })
    }
}

fn parse_opt(raw: Option<&str>, field: &'static str) -> MeetingResult<Option<ObjectId>> {
    raw.map(|s| s.parse().map_err(|_| MeetingError::invalid(field)))
        .transpose()
}
