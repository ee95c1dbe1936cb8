//! HTTP API for meeting records
//!
//! Routes under `/api/meeting`:
//! - GET / - List enriched meetings (query: `createdBy`, `_id`)
//! - GET /view/:id - Get one enriched meeting
//! - POST /add - Create a meeting
//! - DELETE /delete/:id - Delete one meeting
//! - POST /deleteMany - Delete meetings matching the query filter
//!
//! Plus GET /health at the root.

mod handlers;
mod routes;
mod state;

pub use routes::{create_router, MEETING_PREFIX};
pub use state::AppState;
