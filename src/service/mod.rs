//! Meeting use cases
//!
//! `MeetingService` validates input, delegates to the store, and translates
//! store failures into `MeetingError`. The read-path join/filter/projection
//! lives in `enrich` as plain functions over joined rows.

mod enrich;
mod meeting_service;

pub use enrich::{enrich, enrich_one};
pub use meeting_service::MeetingService;
