//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod engagement_repo;
pub mod like_history_repo;
pub mod project_repo;

pub use engagement_repo::EngagementRepo;
pub use like_history_repo::LikeHistoryRepo;
pub use project_repo::ProjectRepo;
