use crate::model::EnrichedMeeting;
use crate::store::JoinedMeeting;

/// Turn joined rows into enriched meetings
///
/// Rows whose creating user exists and is soft-deleted are dropped. Rows
/// with no joined user are kept and carry no `created_by_name`.
pub fn enrich(rows: Vec<JoinedMeeting>) -> Vec<EnrichedMeeting> {
    rows.into_iter().filter_map(enrich_one).collect()
}

/// Enrich a single row, or `None` if its creator is soft-deleted
pub fn enrich_one(row: JoinedMeeting) -> Option<EnrichedMeeting> {
    if creator_deleted(&row) {
        return None;
    }

    let JoinedMeeting {
        meeting,
        user,
        contacts,
        leads,
    } = row;

    Some(EnrichedMeeting {
        meeting,
        created_by_name: user.map(|u| u.full_name()),
        attendee_names: contacts.iter().map(|c| c.full_name()).collect(),
        attendee_lead_names: leads.iter().map(|l| l.display_name()).collect(),
    })
}

fn creator_deleted(row: &JoinedMeeting) -> bool {
    row.user.as_ref().is_some_and(|u| u.deleted)
}
