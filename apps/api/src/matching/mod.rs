//! Match Engine — ranks shortlisted candidates against one project's
//! requirements and commits assignments.

pub mod assignment;
pub mod engine;
pub mod handlers;
pub mod store;
