pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod service;
pub mod store;

pub use config::Config;
pub use error::{MeetingError, MeetingResult};
pub use http::{create_router, AppState};
pub use model::{
    Contact, EnrichedMeeting, Lead, Meeting, MeetingFilter, MeetingQuery, NewMeeting, ObjectId,
    User,
};
pub use service::MeetingService;
pub use store::{JoinedMeeting, MeetingStore, MemoryStore, SeedData};
