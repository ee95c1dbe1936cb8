//! Meeting records and the directory entities they reference
//!
//! - `Meeting` / `EnrichedMeeting` - stored and read-path shapes
//! - `NewMeeting` / `MeetingDraft` - create input before and after validation
//! - `MeetingFilter` / `MeetingQuery` - typed equality filter and its raw form
//! - `User`, `Contact`, `Lead` - joined collections
//! - `ObjectId` - identifier shared by all collections

mod directory;
mod id;
mod meeting;

pub use directory::{Contact, Lead, User};
pub use id::{ObjectId, ParseObjectIdError};
pub use meeting::{
    EnrichedMeeting, Meeting, MeetingDraft, MeetingFilter, MeetingQuery, NewMeeting,
};
